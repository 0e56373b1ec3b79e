use crate::domain::model::Imei;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Smallest `<base>_<k>.<ext>` with `k >= 1` that the storage does not hold yet.
pub fn next_available_name<S: Storage + ?Sized>(
    storage: &S,
    base_name: &str,
    extension: &str,
) -> Result<String> {
    let mut index: u64 = 1;
    loop {
        let name = format!("{}_{}.{}", base_name, index, extension);
        if !storage.exists(&name)? {
            tracing::debug!("Probed {} candidate name(s), using {}", index, name);
            return Ok(name);
        }
        index += 1;
    }
}

/// One record per line, each terminated by a newline.
pub fn render_records(records: &[Imei]) -> String {
    let mut out = String::with_capacity(records.len() * 16);
    for record in records {
        out.push_str(record.as_str());
        out.push('\n');
    }
    out
}
