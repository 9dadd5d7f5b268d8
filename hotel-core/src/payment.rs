use serde::{Deserialize, Serialize};
use std::fmt;

/// How the guest settles the stay
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    #[serde(rename = "GCASH")]
    GCash,
    Cash,
}

impl PaymentMethod {
    /// Menu choice: `1` card, `2` GCash, anything else cash
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::Card,
            "2" => Self::GCash,
            _ => Self::Cash,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::GCash => "GCash",
            Self::Cash => "Cash",
        }
    }

    /// Acknowledgement shown once the amount is settled
    pub fn acknowledgement(&self, amount: &str) -> String {
        match self {
            Self::Card => format!("Payment of {} charged to card. APPROVED.", amount),
            Self::GCash => format!("GCash payment of {} confirmed.", amount),
            Self::Cash => format!("Cash payment of {} accepted.", amount),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
