use crate::browser::driver::Driver;
use crate::browser::locator::Locator;
use crate::data::test_data::COMBINATION_PLIERS_NAME;
use crate::error::SuiteResult;
use crate::pages::base_page::{BasePage, PageTiming};
use crate::pages::home_page::HomePage;
use crate::pages::login_page::LoginPage;
use crate::pages::product_page::ProductPage;

/// Title of the first product in "My favorites".
pub const FAVORITE_CARD_TITLE: Locator = Locator::Css(".card-title");

pub struct ProfilePage<'a, D: Driver + ?Sized> {
    base: BasePage<'a, D>,
}

impl<'a, D: Driver + ?Sized> ProfilePage<'a, D> {
    pub fn new(driver: &'a mut D, timing: PageTiming) -> Self {
        ProfilePage {
            base: BasePage::new(driver, timing),
        }
    }

    fn home(&mut self) -> HomePage<'_, D> {
        HomePage::from_base(self.base.reborrow())
    }

    pub fn assert_pliers_added_to_favorites(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&FAVORITE_CARD_TITLE)?;
        let current_item_name = self.base.get_text(&FAVORITE_CARD_TITLE)?;
        self.base.assert_strings_equal(&current_item_name, COMBINATION_PLIERS_NAME)
    }

    /// Log in, favourite Combination Pliers, and find it under "My favorites".
    pub fn perform_wishlist_test(&mut self) -> SuiteResult<()> {
        LoginPage::from_base(self.base.reborrow()).perform_login()?;
        ProductPage::from_base(self.base.reborrow()).click_home()?;

        let mut home = self.home();
        home.click_combination_pliers()?;
        home.add_combination_pliers_to_wishlist()?;
        home.click_jane_doe()?;
        home.click_profile_favorites()?;

        self.assert_pliers_added_to_favorites()
    }
}
