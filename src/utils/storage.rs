use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Reads a raw string value from localStorage
pub fn load_raw_from_storage(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn save_raw_to_storage(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Could not write '{}' to localStorage", key))
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("Could not remove '{}' from localStorage", key))
}
