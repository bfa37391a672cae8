use tracing::info;

use crate::browser::driver::Driver;
use crate::browser::locator::Locator;
use crate::error::{SuiteError, SuiteResult};
use crate::pages::base_page::{BasePage, PageTiming};

pub const SIGN_IN_BUTTON: Locator = Locator::XPath("//a[text()='Sign in']");
pub const COMBINATION_PLIERS: Locator = Locator::XPath("//h5[text()=' Combination Pliers ']");
pub const FAVORITES_BUTTON: Locator = Locator::Id("btn-add-to-favorites");
pub const JANE_DOE_MENU: Locator = Locator::XPath("//a[text()=' Jane Doe ']");
pub const PROFILE_FAVORITES: Locator = Locator::XPath("//a[text()='My favorites']");
pub const PRODUCT_CARD: Locator = Locator::Css(".card");
pub const CATEGORIES_MENU: Locator = Locator::XPath("//a[text()=' Categories ']");
pub const POWER_TOOLS: Locator = Locator::XPath("//a[text()='Power Tools']");
pub const GRINDER_CHECKBOX: Locator = Locator::XPath("//label[text()=' Grinder']");
pub const SANDER_CHECKBOX: Locator = Locator::XPath("//label[text()=' Sander']");
pub const SAW_CHECKBOX: Locator = Locator::XPath("//label[text()=' Saw']");

/// Landing page: header navigation, product grid and category filters.
pub struct HomePage<'a, D: Driver + ?Sized> {
    base: BasePage<'a, D>,
}

impl<'a, D: Driver + ?Sized> HomePage<'a, D> {
    pub fn new(driver: &'a mut D, timing: PageTiming) -> Self {
        Self::from_base(BasePage::new(driver, timing))
    }

    pub fn from_base(base: BasePage<'a, D>) -> Self {
        HomePage { base }
    }

    pub fn click_sign_in_button(&mut self) -> SuiteResult<()> {
        self.base.click_element(&SIGN_IN_BUTTON)
    }

    pub fn click_combination_pliers(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&COMBINATION_PLIERS)?;
        self.base.click_element(&COMBINATION_PLIERS)
    }

    pub fn add_combination_pliers_to_wishlist(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&FAVORITES_BUTTON)?;
        self.base.click_element(&FAVORITES_BUTTON)
    }

    pub fn click_jane_doe(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&JANE_DOE_MENU)?;
        self.base.click_element(&JANE_DOE_MENU)
    }

    /// Block until the signed-in user's menu appears in the header.
    pub fn wait_for_user_menu(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&JANE_DOE_MENU).map(|_| ())
    }

    pub fn click_profile_favorites(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&PROFILE_FAVORITES)?;
        self.base.click_element(&PROFILE_FAVORITES)
    }

    /// Product cards currently in the grid. The grid re-renders without a
    /// loading marker, so this pauses before counting.
    pub fn get_number_of_items(&mut self) -> SuiteResult<usize> {
        self.base.pause();
        self.base.get_number_of_elements(&PRODUCT_CARD)
    }

    pub fn click_categories(&mut self) -> SuiteResult<()> {
        self.base.click_element(&CATEGORIES_MENU)
    }

    pub fn click_power_tools(&mut self) -> SuiteResult<()> {
        self.base.wait_visibility(&POWER_TOOLS)?;
        self.base.click_element(&POWER_TOOLS)
    }

    pub fn check_grinder(&mut self) -> SuiteResult<()> {
        self.check_filter(&GRINDER_CHECKBOX)
    }

    pub fn check_sander(&mut self) -> SuiteResult<()> {
        self.check_filter(&SANDER_CHECKBOX)
    }

    pub fn check_saw(&mut self) -> SuiteResult<()> {
        self.check_filter(&SAW_CHECKBOX)
    }

    fn check_filter(&mut self, label: &Locator) -> SuiteResult<()> {
        self.base.pause();
        self.base.click_element(label)
    }

    /// Filtering Power Tools by Grinder, Sander and Saw must shrink the grid.
    pub fn perform_category_test(&mut self) -> SuiteResult<()> {
        let default_number_of_items = self.get_number_of_items()?;
        self.click_categories()?;
        self.click_power_tools()?;
        self.check_grinder()?;
        self.check_sander()?;
        self.check_saw()?;
        let power_tools_number_of_items = self.get_number_of_items()?;

        info!(full = default_number_of_items, power_tools = power_tools_number_of_items, "product counts");

        if power_tools_number_of_items < default_number_of_items {
            Ok(())
        } else {
            Err(SuiteError::assertion(
                "filtered product count below full count",
                format!("< {}", default_number_of_items),
                power_tools_number_of_items,
            ))
        }
    }
}
