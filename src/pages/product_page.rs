use crate::browser::driver::Driver;
use crate::browser::locator::Locator;
use crate::data::test_data::{
    CHECKOUT_POSTCODE, CHECKOUT_STATE, COMBINATION_PLIERS_PRICE, CUSTOMER, PLIERS_PRICE,
    cart_total, format_price,
};
use crate::error::SuiteResult;
use crate::pages::base_page::{BasePage, PageTiming};
use crate::pages::home_page::HomePage;

pub const INCREASE_QUANTITY_BUTTON: Locator = Locator::Id("btn-increase-quantity");
pub const ADD_TO_CART_BUTTON: Locator = Locator::Id("btn-add-to-cart");
pub const HEADER_HOME: Locator = Locator::XPath("//a[text()='Home']");
pub const PLIERS: Locator = Locator::XPath("//h5[text()=' Pliers ']");
pub const CART_COUNT_BUBBLE: Locator = Locator::Id("lblCartCount");
pub const ADDED_TO_CART_TOAST: Locator =
    Locator::XPath("//div[text()=' Product added to shopping cart. ']");
pub const CART_ICON: Locator = Locator::Css("[data-icon='cart-shopping']");

// The checkout wizard renders each step's button with different whitespace.
pub const PROCEED_FROM_CART: Locator = Locator::XPath("//button[text()='Proceed to checkout']");
pub const PROCEED_FROM_SIGN_IN: Locator = Locator::XPath("//button[text()=' Proceed to checkout ']");
pub const PROCEED_FROM_ADDRESS: Locator = Locator::XPath("//button[text()='Proceed to checkout ']");

pub const CHECKOUT_EMAIL_FIELD: Locator = Locator::XPath("//input[@id='email']");
pub const CHECKOUT_PASSWORD_FIELD: Locator = Locator::XPath("//input[@id='password']");
pub const CHECKOUT_LOGIN_BUTTON: Locator = Locator::XPath("//input[@class='btnSubmit']");
pub const STATE_FIELD: Locator = Locator::Id("state");
pub const POSTCODE_FIELD: Locator = Locator::Id("postcode");
pub const PAYMENT_METHOD_DROPDOWN: Locator = Locator::Id("payment-method");
pub const CASH_ON_DELIVERY_OPTION: Locator = Locator::XPath("//option[text()='Cash on Delivery']");
pub const CONFIRM_BUTTON: Locator = Locator::XPath("//button[text()=' Confirm ']");
pub const PAYMENT_SUCCESSFUL_BANNER: Locator = Locator::XPath("//div[text()='Payment was successful']");
pub const ORDER_CONFIRMATION: Locator = Locator::Id("order-confirmation");

pub const EXPECTED_CART_COUNT: &str = "3";
pub const EXPECTED_TOTAL: &str = "$40.31";

/// Product detail page plus the cart and checkout wizard reached from it.
pub struct ProductPage<'a, D: Driver + ?Sized> {
    base: BasePage<'a, D>,
}

impl<'a, D: Driver + ?Sized> ProductPage<'a, D> {
    pub fn new(driver: &'a mut D, timing: PageTiming) -> Self {
        Self::from_base(BasePage::new(driver, timing))
    }

    pub fn from_base(base: BasePage<'a, D>) -> Self {
        ProductPage { base }
    }

    fn home(&mut self) -> HomePage<'_, D> {
        HomePage::from_base(self.base.reborrow())
    }

    /// Bump the quantity selector from one to two.
    pub fn add_two_items(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&INCREASE_QUANTITY_BUTTON)?;
        self.base.click_element(&INCREASE_QUANTITY_BUTTON)
    }

    pub fn click_add_to_cart_button(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&ADD_TO_CART_BUTTON)?;
        self.base.click_element(&ADD_TO_CART_BUTTON)
    }

    pub fn click_home(&mut self) -> SuiteResult<()> {
        self.base.click_element(&HEADER_HOME)
    }

    pub fn click_pliers(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&PLIERS)?;
        self.base.click_element(&PLIERS)
    }

    pub fn assert_number_of_items_added(&mut self) -> SuiteResult<()> {
        let current = self.base.get_text(&CART_COUNT_BUBBLE)?;
        self.base.assert_strings_equal(&current, EXPECTED_CART_COUNT)
    }

    /// Open the cart once the "added" toast has gone, it covers the icon.
    pub fn click_cart(&mut self) -> SuiteResult<()> {
        self.base.wait_invisibility(&ADDED_TO_CART_TOAST)?;
        self.base.click_element(&CART_ICON)
    }

    /// Two Combination Pliers and one Pliers must come to the advertised total.
    pub fn assert_total_to_pay(&mut self) -> SuiteResult<()> {
        let total = cart_total(&[(2, COMBINATION_PLIERS_PRICE), (1, PLIERS_PRICE)]);
        self.base.assert_strings_equal(&format_price(total), EXPECTED_TOTAL)
    }

    pub fn click_proceed_to_checkout(&mut self) -> SuiteResult<()> {
        self.click_when_clickable(&PROCEED_FROM_CART)
    }

    pub fn click_proceed_to_checkout_after_sign_in(&mut self) -> SuiteResult<()> {
        self.click_when_clickable(&PROCEED_FROM_SIGN_IN)
    }

    pub fn click_proceed_to_checkout_after_address(&mut self) -> SuiteResult<()> {
        self.click_when_clickable(&PROCEED_FROM_ADDRESS)
    }

    fn click_when_clickable(&mut self, locator: &Locator) -> SuiteResult<()> {
        self.base.wait_to_be_clickable(locator)?;
        self.base.click_element(locator)
    }

    pub fn type_in_email(&mut self, email: &str) -> SuiteResult<()> {
        self.base.wait_visibility(&CHECKOUT_EMAIL_FIELD)?;
        self.base.type_in(&CHECKOUT_EMAIL_FIELD, email)
    }

    pub fn type_in_password(&mut self, password: &str) -> SuiteResult<()> {
        self.base.type_in(&CHECKOUT_PASSWORD_FIELD, password)
    }

    pub fn click_login_button(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&CHECKOUT_LOGIN_BUTTON)?;
        self.base.click_element(&CHECKOUT_LOGIN_BUTTON)
    }

    /// The address form is prefilled asynchronously and overwrites early input.
    pub fn type_in_state(&mut self, state: &str) -> SuiteResult<()> {
        self.base.pause();
        self.base.wait_to_be_clickable(&STATE_FIELD)?;
        self.base.type_in(&STATE_FIELD, state)
    }

    pub fn type_in_postcode(&mut self, postcode: &str) -> SuiteResult<()> {
        self.base.wait_to_be_clickable(&POSTCODE_FIELD)?;
        self.base.type_in(&POSTCODE_FIELD, postcode)
    }

    pub fn click_payment_method_dropdown(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&PAYMENT_METHOD_DROPDOWN)?;
        self.base.click_element(&PAYMENT_METHOD_DROPDOWN)
    }

    pub fn click_cash_on_delivery_option(&mut self) -> SuiteResult<()> {
        self.click_when_clickable(&CASH_ON_DELIVERY_OPTION)
    }

    pub fn click_confirm(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&CONFIRM_BUTTON)?;
        self.base.click_element(&CONFIRM_BUTTON)
    }

    /// Fill the cart with three items and check out with cash on delivery.
    pub fn perform_cart_test(&mut self) -> SuiteResult<()> {
        self.home().click_combination_pliers()?;
        self.add_two_items()?;
        self.click_add_to_cart_button()?;
        self.base.wait_for_text_to_be_loaded(&CART_COUNT_BUBBLE, "2")?;
        self.click_home()?;
        self.click_pliers()?;
        self.click_add_to_cart_button()?;
        self.base.wait_for_text_to_be_loaded(&CART_COUNT_BUBBLE, EXPECTED_CART_COUNT)?;
        self.assert_number_of_items_added()?;
        self.click_cart()?;
        self.assert_total_to_pay()?;

        self.click_proceed_to_checkout()?;
        self.type_in_email(CUSTOMER.email)?;
        self.type_in_password(CUSTOMER.password)?;
        self.click_login_button()?;
        self.click_proceed_to_checkout_after_sign_in()?;
        self.type_in_state(CHECKOUT_STATE)?;
        self.type_in_postcode(CHECKOUT_POSTCODE)?;
        self.click_proceed_to_checkout_after_address()?;

        self.click_payment_method_dropdown()?;
        self.click_cash_on_delivery_option()?;
        self.click_confirm()?;
        self.base.wait_visibility(&PAYMENT_SUCCESSFUL_BANNER)?;
        self.base.assert_element_displayed(&PAYMENT_SUCCESSFUL_BANNER)?;
        self.click_confirm()?;
        self.base.wait_visibility(&ORDER_CONFIRMATION)?;
        self.base.assert_element_displayed(&ORDER_CONFIRMATION)
    }
}
