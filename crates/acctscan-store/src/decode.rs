use crate::LoadedAccounts;
use acctscan_types::{Account, RejectedRecord};
use serde_json::Value;

/// Decode a JSON array of account records.
///
/// Fails only when the document itself is not a JSON array. Elements that do not decode as an
/// [`Account`] (missing field, unparseable timestamp, negative attempt count, unknown status, ...)
/// are returned in `rejected` with their position and, when readable, their `id`.
pub fn decode_accounts(text: &str) -> Result<LoadedAccounts, serde_json::Error> {
    let records: Vec<Value> = serde_json::from_str(text)?;

    let mut loaded = LoadedAccounts::default();
    for (index, record) in records.into_iter().enumerate() {
        let id = record_id(&record);
        match serde_json::from_value::<Account>(record) {
            Ok(account) => loaded.accounts.push(account),
            Err(err) => loaded.rejected.push(RejectedRecord {
                index,
                id,
                reason: err.to_string(),
            }),
        }
    }

    Ok(loaded)
}

fn record_id(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
