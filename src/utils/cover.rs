pub const COVERS_BASE_URL: &str = "https://covers.openlibrary.org";

pub fn cover_url(base_url: &str, cover_id: u64) -> String {
    format!("{}/b/id/{}-M.jpg", base_url.trim_end_matches('/'), cover_id)
}
