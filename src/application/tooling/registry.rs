//! Declarations for the built-in commerce tools.

use crate::model::ToolDeclaration;

pub const GET_CATEGORIES_TOOL: &str = "get_categories_tool";
pub const GET_PRODUCTS_TOOL: &str = "get_products_tool";
pub const SEARCH_PRODUCTS_TOOL: &str = "search_products_tool";
pub const SEARCH_HOTELS_TOOL: &str = "search_hotels_tool";

/// The known tools as a closed set. Both execution strategies dispatch on
/// this instead of re-matching raw name strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommerceTool {
    Categories,
    Products,
    SearchProducts,
    SearchHotels,
}

impl CommerceTool {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            GET_CATEGORIES_TOOL => Some(Self::Categories),
            GET_PRODUCTS_TOOL => Some(Self::Products),
            SEARCH_PRODUCTS_TOOL => Some(Self::SearchProducts),
            SEARCH_HOTELS_TOOL => Some(Self::SearchHotels),
            _ => None,
        }
    }
}

/// The full set of tools offered to the model. Built once at startup and
/// shared read-only by every turn.
pub fn commerce_declarations() -> Vec<ToolDeclaration> {
    vec![
        ToolDeclaration::new(
            GET_CATEGORIES_TOOL,
            "Fetch all product categories available in the ecommerce system",
        ),
        ToolDeclaration::new(
            GET_PRODUCTS_TOOL,
            "Fetch all products along with their associated category",
        ),
        ToolDeclaration::new(
            SEARCH_PRODUCTS_TOOL,
            "Search for products using a search term",
        )
        .with_required_param(
            "searchTerm",
            "string",
            "The search term to look for products",
        ),
        ToolDeclaration::new(
            SEARCH_HOTELS_TOOL,
            "Search for hotels based on location and other criteria",
        )
        .with_required_param("location", "string", "Location to search for hotels")
        .with_param("checkInDate", "string", "Check-in date in YYYY-MM-DD format")
        .with_param(
            "checkOutDate",
            "string",
            "Check-out date in YYYY-MM-DD format",
        )
        .with_param("numGuests", "integer", "Number of guests")
        .with_param("roomType", "string", "Type of room required"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn declares_all_four_commerce_tools() {
        let names: Vec<String> = commerce_declarations()
            .into_iter()
            .map(|tool| tool.name)
            .collect();
        assert_eq!(
            names,
            vec![
                GET_CATEGORIES_TOOL,
                GET_PRODUCTS_TOOL,
                SEARCH_PRODUCTS_TOOL,
                SEARCH_HOTELS_TOOL,
            ]
        );
    }

    #[test]
    fn every_declared_tool_is_dispatchable() {
        for tool in commerce_declarations() {
            assert!(
                CommerceTool::from_name(&tool.name).is_some(),
                "{} has no dispatch entry",
                tool.name
            );
        }
        assert_eq!(CommerceTool::from_name("bogus_tool"), None);
    }

    #[test]
    fn search_products_declaration_serializes_to_wire_schema() {
        let declaration = commerce_declarations()
            .into_iter()
            .find(|tool| tool.name == SEARCH_PRODUCTS_TOOL)
            .expect("search_products_tool declared");

        let value = serde_json::to_value(&declaration).expect("declaration serializes");
        assert_eq!(
            value,
            json!({
                "name": "search_products_tool",
                "description": "Search for products using a search term",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "searchTerm": {
                            "type": "string",
                            "description": "The search term to look for products"
                        }
                    },
                    "required": ["searchTerm"]
                }
            })
        );
    }

    #[test]
    fn hotel_declaration_requires_only_location() {
        let declaration = commerce_declarations()
            .into_iter()
            .find(|tool| tool.name == SEARCH_HOTELS_TOOL)
            .expect("search_hotels_tool declared");

        assert_eq!(declaration.parameters.required, vec!["location"]);
        assert_eq!(declaration.parameters.properties.len(), 5);
    }
}
