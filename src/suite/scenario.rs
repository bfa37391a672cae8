use crate::browser::driver::Driver;
use crate::data::test_data::{Credentials, INVALID_LOGIN_CREDENTIALS};
use crate::error::{SuiteError, SuiteResult};
use crate::pages::base_page::PageTiming;
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;
use crate::pages::product_page::ProductPage;
use crate::pages::profile_page::ProfilePage;

/// The scripted end-to-end scenarios. Each runs in its own browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    NegativeLogin,
    Category,
    Cart,
    Wishlist,
}

/// One invocation of a scenario, with its data row if it is parameterized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCase {
    pub label: String,
    pub credentials: Option<Credentials>,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::NegativeLogin,
        Scenario::Category,
        Scenario::Cart,
        Scenario::Wishlist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::NegativeLogin => "negative_login",
            Scenario::Category => "category",
            Scenario::Cart => "cart",
            Scenario::Wishlist => "wishlist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::NegativeLogin => "testing the login functionality of the app",
            Scenario::Category => "Checking if number of elements in category is lower than total",
            Scenario::Cart => "Adding and checking items in the cart",
            Scenario::Wishlist => "Checking if the item is added to favorites",
        }
    }

    pub fn from_name(name: &str) -> Option<Scenario> {
        Scenario::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn cases(&self) -> Vec<ScenarioCase> {
        match self {
            Scenario::NegativeLogin => INVALID_LOGIN_CREDENTIALS
                .iter()
                .enumerate()
                .map(|(i, creds)| ScenarioCase {
                    label: format!(
                        "{}[{}](\"{}\", \"{}\")",
                        self.name(),
                        i,
                        creds.email,
                        creds.password
                    ),
                    credentials: Some(*creds),
                })
                .collect(),
            _ => vec![ScenarioCase {
                label: self.name().to_string(),
                credentials: None,
            }],
        }
    }

    /// Run one case against a driver already sitting on the site.
    pub fn execute<D: Driver + ?Sized>(
        &self,
        case: &ScenarioCase,
        driver: &mut D,
        timing: PageTiming,
    ) -> SuiteResult<()> {
        match self {
            Scenario::NegativeLogin => {
                let creds = case.credentials.ok_or_else(|| {
                    SuiteError::Config(format!("case '{}' has no credentials", case.label))
                })?;
                LoginPage::new(driver, timing).perform_negative_login(creds.email, creds.password)
            }
            Scenario::Category => HomePage::new(driver, timing).perform_category_test(),
            Scenario::Cart => ProductPage::new(driver, timing).perform_cart_test(),
            Scenario::Wishlist => ProfilePage::new(driver, timing).perform_wishlist_test(),
        }
    }
}

/// Resolve scenario names; an empty selection means all of them.
pub fn select_scenarios(names: &[String]) -> SuiteResult<Vec<Scenario>> {
    if names.is_empty() {
        return Ok(Scenario::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| {
            Scenario::from_name(name).ok_or_else(|| {
                let known: Vec<&str> = Scenario::ALL.iter().map(|s| s.name()).collect();
                SuiteError::Config(format!(
                    "unknown scenario '{}' (known: {})",
                    name,
                    known.join(", ")
                ))
            })
        })
        .collect()
}
