use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use toolshop_e2e::browser::locator::Locator;
use toolshop_e2e::browser::wait::Wait;
use toolshop_e2e::data::test_data::{CUSTOMER, COMBINATION_PLIERS_NAME};
use toolshop_e2e::pages::base_page::PageTiming;
use toolshop_e2e::pages::home_page::*;
use toolshop_e2e::pages::login_page::{EMAIL_FIELD, LOGIN_BUTTON, PASSWORD_FIELD};
use toolshop_e2e::pages::product_page::*;
use toolshop_e2e::pages::profile_page::FAVORITE_CARD_TITLE;

use super::fake_driver::{FakeDom, FakeDriver, FakeElement};

pub const ALL_PRODUCTS: usize = 9;
pub const FILTERED_PRODUCTS: usize = 4;

/// Fast waits and no fixed pauses.
pub fn fast_timing() -> PageTiming {
    PageTiming {
        wait: Wait::new(Duration::from_millis(200), Duration::from_millis(1)),
        settle: Duration::ZERO,
    }
}

fn show(dom: &mut FakeDom, locator: Locator) {
    dom.put(locator, FakeElement::visible(""));
}

fn credentials_match(dom: &FakeDom) -> bool {
    dom.value_of(&EMAIL_FIELD) == CUSTOMER.email && dom.value_of(&PASSWORD_FIELD) == CUSTOMER.password
}

/// An in-memory toolshop good enough for every scripted flow.
pub fn fake_toolshop() -> FakeDriver {
    let driver = FakeDriver::new();

    driver.with_dom(|dom| {
        dom.put_many(PRODUCT_CARD, ALL_PRODUCTS);
        show(dom, SIGN_IN_BUTTON);
        show(dom, HEADER_HOME);
        show(dom, CATEGORIES_MENU);
        dom.put(COMBINATION_PLIERS, FakeElement::visible(" Combination Pliers "));
        dom.put(PLIERS, FakeElement::visible(" Pliers "));
        dom.put(CART_ICON, FakeElement::visible(""));
    });

    // ---- login ----
    driver.on_click(SIGN_IN_BUTTON, |dom| {
        show(dom, EMAIL_FIELD);
        show(dom, PASSWORD_FIELD);
        dom.put(LOGIN_BUTTON, FakeElement::visible("Login"));
    });
    driver.on_click(LOGIN_BUTTON, |dom| {
        if credentials_match(dom) {
            dom.remove(&LOGIN_BUTTON);
            dom.put(JANE_DOE_MENU, FakeElement::visible(" Jane Doe "));
        }
    });

    // ---- category filter ----
    driver.on_click(CATEGORIES_MENU, |dom| show(dom, POWER_TOOLS));
    driver.on_click(POWER_TOOLS, |dom| {
        show(dom, GRINDER_CHECKBOX);
        show(dom, SANDER_CHECKBOX);
        show(dom, SAW_CHECKBOX);
    });
    driver.on_click(SAW_CHECKBOX, |dom| dom.put_many(PRODUCT_CARD, FILTERED_PRODUCTS));

    // ---- product detail and cart ----
    let quantity = Rc::new(Cell::new(1u32));
    let in_cart = Rc::new(Cell::new(0u32));

    let open_product = {
        let quantity = quantity.clone();
        move |dom: &mut FakeDom| {
            quantity.set(1);
            show(dom, INCREASE_QUANTITY_BUTTON);
            show(dom, ADD_TO_CART_BUTTON);
            show(dom, FAVORITES_BUTTON);
        }
    };
    driver.on_click(COMBINATION_PLIERS, open_product.clone());
    driver.on_click(PLIERS, open_product);

    {
        let quantity = quantity.clone();
        driver.on_click(INCREASE_QUANTITY_BUTTON, move |_| quantity.set(quantity.get() + 1));
    }
    {
        let quantity = quantity.clone();
        let in_cart = in_cart.clone();
        driver.on_click(ADD_TO_CART_BUTTON, move |dom| {
            in_cart.set(in_cart.get() + quantity.get());
            dom.put(CART_COUNT_BUBBLE, FakeElement::visible(&in_cart.get().to_string()));
            dom.put(ADDED_TO_CART_TOAST, FakeElement::expiring(" Product added to shopping cart. ", 3));
        });
    }
    driver.on_click(HEADER_HOME, |dom| {
        dom.remove(&INCREASE_QUANTITY_BUTTON);
        dom.remove(&ADD_TO_CART_BUTTON);
    });

    // ---- checkout wizard ----
    driver.on_click(CART_ICON, |dom| show(dom, PROCEED_FROM_CART));
    driver.on_click(PROCEED_FROM_CART, |dom| {
        show(dom, CHECKOUT_EMAIL_FIELD);
        show(dom, CHECKOUT_PASSWORD_FIELD);
        show(dom, CHECKOUT_LOGIN_BUTTON);
    });
    driver.on_click(CHECKOUT_LOGIN_BUTTON, |dom| {
        if credentials_match(dom) {
            show(dom, PROCEED_FROM_SIGN_IN);
        }
    });
    driver.on_click(PROCEED_FROM_SIGN_IN, |dom| {
        show(dom, STATE_FIELD);
        show(dom, POSTCODE_FIELD);
        show(dom, PROCEED_FROM_ADDRESS);
    });
    driver.on_click(PROCEED_FROM_ADDRESS, |dom| show(dom, PAYMENT_METHOD_DROPDOWN));
    driver.on_click(PAYMENT_METHOD_DROPDOWN, |dom| show(dom, CASH_ON_DELIVERY_OPTION));
    driver.on_click(CASH_ON_DELIVERY_OPTION, |dom| show(dom, CONFIRM_BUTTON));

    let confirmations = Rc::new(Cell::new(0u32));
    driver.on_click(CONFIRM_BUTTON, move |dom| {
        confirmations.set(confirmations.get() + 1);
        match confirmations.get() {
            1 => show(dom, PAYMENT_SUCCESSFUL_BANNER),
            _ => show(dom, ORDER_CONFIRMATION),
        }
    });

    // ---- wishlist ----
    let favorited = Rc::new(Cell::new(false));
    {
        let favorited = favorited.clone();
        driver.on_click(FAVORITES_BUTTON, move |_| favorited.set(true));
    }
    driver.on_click(JANE_DOE_MENU, |dom| show(dom, PROFILE_FAVORITES));
    driver.on_click(PROFILE_FAVORITES, move |dom| {
        if favorited.get() {
            dom.put(FAVORITE_CARD_TITLE, FakeElement::visible(COMBINATION_PLIERS_NAME));
        }
    });

    driver
}
