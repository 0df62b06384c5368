mod gemini;
mod traits;
mod types;

pub use gemini::GeminiClient;
pub use traits::ModelClient;
pub use types::{
    Content, FunctionCall, FunctionResponse, ModelError, ModelReply, ModelRequest, ModelTurn,
    ParameterSchema, ParameterSpec, Part, ToolDeclaration,
};
