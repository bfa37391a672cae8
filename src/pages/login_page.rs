use crate::browser::driver::Driver;
use crate::browser::locator::Locator;
use crate::data::test_data::CUSTOMER;
use crate::error::SuiteResult;
use crate::pages::base_page::{BasePage, PageTiming};
use crate::pages::home_page::HomePage;

pub const EMAIL_FIELD: Locator = Locator::XPath("//input[@id='email']");
pub const PASSWORD_FIELD: Locator = Locator::XPath("//input[@id='password']");
pub const LOGIN_BUTTON: Locator = Locator::Css(".btnSubmit");

pub struct LoginPage<'a, D: Driver + ?Sized> {
    base: BasePage<'a, D>,
}

impl<'a, D: Driver + ?Sized> LoginPage<'a, D> {
    pub fn new(driver: &'a mut D, timing: PageTiming) -> Self {
        Self::from_base(BasePage::new(driver, timing))
    }

    pub fn from_base(base: BasePage<'a, D>) -> Self {
        LoginPage { base }
    }

    fn home(&mut self) -> HomePage<'_, D> {
        HomePage::from_base(self.base.reborrow())
    }

    pub fn type_email(&mut self, email: &str) -> SuiteResult<()> {
        self.base.wait_visibility(&EMAIL_FIELD)?;
        self.base.clear_text(&EMAIL_FIELD)?;
        self.base.type_in(&EMAIL_FIELD, email)
    }

    pub fn type_password(&mut self, password: &str) -> SuiteResult<()> {
        self.base.wait_visibility(&PASSWORD_FIELD)?;
        self.base.clear_text(&PASSWORD_FIELD)?;
        self.base.type_in(&PASSWORD_FIELD, password)
    }

    pub fn click_login_button(&mut self) -> SuiteResult<()> {
        self.base.click_element(&LOGIN_BUTTON)
    }

    /// Submit bad credentials; the form must still be there afterwards.
    pub fn perform_negative_login(&mut self, email: &str, password: &str) -> SuiteResult<()> {
        self.home().click_sign_in_button()?;
        self.type_email(email)?;
        self.type_password(password)?;
        self.click_login_button()?;
        self.base.assert_element_displayed(&LOGIN_BUTTON)
    }

    /// Sign in as the seeded customer and wait for the account menu.
    pub fn perform_login(&mut self) -> SuiteResult<()> {
        self.home().click_sign_in_button()?;
        self.type_email(CUSTOMER.email)?;
        self.type_password(CUSTOMER.password)?;
        self.click_login_button()?;
        self.home().wait_for_user_menu()
    }
}
