use crate::model::ToolDeclaration;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub prompt: String,
    /// Prior messages from the UI. Accepted but unused: each turn is
    /// independent.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub history: Vec<Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToolInventoryResponse {
    pub tools: Vec<ToolDeclaration>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HotelSearchParams {
    pub location: String,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub num_guests: Option<i64>,
    pub room_type: Option<String>,
}

impl HotelSearchParams {
    /// Render as upstream query parameters, dropping absent fields.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("location".to_string(), self.location.clone())];
        if let Some(date) = &self.check_in_date {
            pairs.push(("checkInDate".to_string(), date.clone()));
        }
        if let Some(date) = &self.check_out_date {
            pairs.push(("checkOutDate".to_string(), date.clone()));
        }
        if let Some(guests) = self.num_guests {
            pairs.push(("numGuests".to_string(), guests.to_string()));
        }
        if let Some(room_type) = &self.room_type {
            pairs.push(("roomType".to_string(), room_type.clone()));
        }
        pairs
    }
}
