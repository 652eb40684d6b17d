#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregister {
    pub activity_name: String,
    pub email: String,
}

impl Unregister {
    pub fn confirmation(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity_name)
    }
}
