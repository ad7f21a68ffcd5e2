//! Conversion from loosely typed action records
//!
//! Records come from replay files. Only the action types the shop reducers
//! know are accepted.

use super::{CartAction, ProductsAction, ShopAction};
use serde_json::Value;
use shop_store::{Action, ActionRecord, INIT_ACTION_TYPE};
use thiserror::Error;

/// Errors converting an [`ActionRecord`] into a [`ShopAction`]
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("action record has no type")]
    MissingType,

    #[error("unknown action type `{0}`")]
    UnknownType(String),

    #[error("invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TryFrom<ActionRecord> for ShopAction {
    type Error = RecordError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let kind = record
            .action_type()
            .ok_or(RecordError::MissingType)?
            .to_string();
        let payload = record.payload.unwrap_or(Value::Null);
        let invalid = |source| RecordError::InvalidPayload {
            kind: kind.clone(),
            source,
        };

        match kind.as_str() {
            INIT_ACTION_TYPE => Ok(ShopAction::Init),
            "FETCH_PRODUCTS" => {
                let products = serde_json::from_value(payload).map_err(invalid)?;
                Ok(ShopAction::Products(ProductsAction::FetchProducts(products)))
            }
            "ADD_TO_CART" => {
                let id = serde_json::from_value(payload).map_err(invalid)?;
                Ok(ShopAction::Cart(CartAction::AddToCart(id)))
            }
            _ => Err(RecordError::UnknownType(kind.clone())),
        }
    }
}

/// Parse a JSON array of action records, keeping the ones that convert
pub fn parse_replay(json: &str) -> anyhow::Result<Vec<ShopAction>> {
    let records: Vec<ActionRecord> = serde_json::from_str(json)?;
    let total = records.len();

    let actions: Vec<ShopAction> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match ShopAction::try_from(record) {
            Ok(action) => Some(action),
            Err(e) => {
                log::warn!("Skipping replay record {}: {}", index, e);
                None
            }
        })
        .collect();

    log::info!("Loaded {} of {} replay actions", actions.len(), total);
    Ok(actions)
}
