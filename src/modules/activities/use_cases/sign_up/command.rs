#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub activity_name: String,
    pub email: String,
}

impl SignUp {
    pub fn confirmation(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}
