//! Fixed inputs the scenarios feed into the site.

/// A login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub email: &'static str,
    pub password: &'static str,
}

/// Rows for the negative login scenario. None of them may log in.
pub const INVALID_LOGIN_CREDENTIALS: [Credentials; 3] = [
    Credentials { email: "asd@asd.com", password: "asd" },
    Credentials { email: "", password: "" },
    Credentials { email: "qwerty", password: "asd@asd.com" },
];

/// Seeded customer account of the demo site.
pub const CUSTOMER: Credentials = Credentials {
    email: "customer@practicesoftwaretesting.com",
    password: "welcome01",
};

pub const CHECKOUT_STATE: &str = "Test state";
pub const CHECKOUT_POSTCODE: &str = "1111";

/// Catalogue prices in cents.
pub const COMBINATION_PLIERS_PRICE: u32 = 14_15;
pub const PLIERS_PRICE: u32 = 12_01;

pub const COMBINATION_PLIERS_NAME: &str = "Combination Pliers";

/// Sum of `(quantity, unit price in cents)` lines.
pub fn cart_total(lines: &[(u32, u32)]) -> u32 {
    lines.iter().map(|(qty, cents)| qty * cents).sum()
}

/// Render cents the way the site does, e.g. `$40.31`.
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
