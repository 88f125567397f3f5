#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub duration_ms: u128,
    pub size_bytes: usize,
    pub body: String,
}

impl HttpResponse {
    pub fn status_line(&self) -> String {
        format!("{} {}", self.status, self.reason)
    }
}
