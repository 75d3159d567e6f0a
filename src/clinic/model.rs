use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub first: String,
    pub last: String,
    pub ssn: String,
}

impl Patient {
    /// `"LAST FIRST (SSN)"`.
    pub fn info(&self) -> String {
        format!("{} {} ({})", self.last, self.first, self.ssn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub first: String,
    pub last: String,
    pub ssn: String,
    pub specialization: String,
}

impl Doctor {
    /// `"LAST FIRST (SSN) [ID]: SPECIALIZATION"`.
    pub fn info(&self) -> String {
        format!(
            "{} {} ({}) [{}]: {}",
            self.last, self.first, self.ssn, self.id, self.specialization
        )
    }
}
