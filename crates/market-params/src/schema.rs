//! Response schemas declared to the generative service
//!
//! Each model type describes its own wire shape, so the schema sent with a
//! request is assembled from the same types the response is parsed into.

use crate::models::{FinancialResponse, MarketStat, TickerStat};
use genai_client::schema;
use serde_json::{Value, json};

/// Types that can describe their JSON shape as a response schema
pub trait ResponseSchema {
    /// Schema node for this type
    fn response_schema() -> Value;
}

impl ResponseSchema for TickerStat {
    fn response_schema() -> Value {
        schema::object(
            json!({
                "ticker": schema::string(),
                "annualizedReturn": schema::number(),
                "annualizedVolatility": schema::number(),
                "beta": schema::describe(schema::number(), "Beta relative to the market benchmark"),
            }),
            &["ticker", "annualizedReturn", "annualizedVolatility", "beta"],
        )
    }
}

impl ResponseSchema for MarketStat {
    fn response_schema() -> Value {
        schema::describe(
            schema::object(
                json!({
                    "annualizedReturn": schema::number(),
                    "annualizedVolatility": schema::number(),
                }),
                &["annualizedReturn", "annualizedVolatility"],
            ),
            "Stats for the market benchmark",
        )
    }
}

impl ResponseSchema for FinancialResponse {
    fn response_schema() -> Value {
        schema::object(
            json!({
                "stats": schema::array(TickerStat::response_schema()),
                "marketStats": MarketStat::response_schema(),
                "correlationMatrix": schema::describe(
                    schema::array(schema::array(schema::number())),
                    "Symmetric correlation matrix corresponding to the order of stats",
                ),
            }),
            &["stats", "correlationMatrix", "marketStats"],
        )
    }
}
