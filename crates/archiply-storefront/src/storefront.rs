//! The storefront page as one explicit context object.
//!
//! [`Storefront`] owns the cart manager, the scheduler and every widget.
//! [`Storefront::handle`] applies a UI event, [`Storefront::tick`] lets
//! virtual time pass. Nothing else mutates page state.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use archiply_cache::{FileStore, KeyValueStore};
use archiply_commerce::cart::{CartEvent, CartManager, CartSummary};
use archiply_commerce::catalog::{Catalog, CategoryFilter, Product};
use archiply_commerce::{Notification, ProductId};

use crate::checkout::Checkout;
use crate::config::StorefrontConfig;
use crate::data::TestimonialsContent;
use crate::newsletter::NewsletterForm;
use crate::notifications::{NotificationCenter, Toast};
use crate::scheduler::{Scheduler, TimerTask};
use crate::sections::{
    render_cart_count, render_cart_items, render_cart_total, render_newsletter,
    render_notification, render_product_grid, render_testimonials,
};
use crate::widgets::{CartModal, MobileNav, ModalState, TestimonialCarousel};

/// Something the visitor did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Add to Cart" on a product card, or "+" on a cart line.
    AddToCart(ProductId),
    /// "-" on a cart line.
    DecrementQuantity(ProductId),
    /// "×" on a cart line.
    RemoveLine(ProductId),
    /// A category card was clicked.
    FilterCategory(CategoryFilter),
    ToggleMobileMenu,
    OpenCart,
    CloseCart,
    /// Click on the modal backdrop, outside its content.
    BackdropClicked,
    Checkout,
    SubmitNewsletter(String),
    /// A testimonial slider dot was clicked.
    SelectTestimonial(usize),
    /// The close button on the current notification.
    DismissNotification,
}

/// Cart-dependent markup, refreshed on every [`CartEvent::Changed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartView {
    pub summary: CartSummary,
    /// Cart modal line list.
    pub items_html: String,
    /// Badge count.
    pub count_text: String,
    /// Total text.
    pub total_text: String,
    /// Number of refreshes applied, including the initial render.
    pub renders: u64,
}

impl CartView {
    fn refresh(&mut self, summary: CartSummary) {
        self.items_html = render_cart_items(&summary);
        self.count_text = render_cart_count(&summary);
        self.total_text = render_cart_total(&summary);
        self.summary = summary;
        self.renders += 1;
    }
}

/// Snapshot of everything currently rendered on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub filter: CategoryFilter,
    pub product_grid: String,
    pub cart: CartView,
    pub modal: ModalState,
    pub nav_open: bool,
    pub notification: Option<String>,
    pub testimonials: String,
    pub newsletter: String,
}

impl PageView {
    /// Assemble the page body.
    pub fn to_html(&self) -> String {
        let nav_class = if self.nav_open { "nav-links active" } else { "nav-links" };
        let modal_style = match self.modal {
            ModalState::Hidden => "none",
            _ => "block",
        };
        let modal_content_class = match self.modal {
            ModalState::Open => "modal-content modal-active",
            _ => "modal-content",
        };

        format!(
            r#"<body>
<header>
    <nav>
        <ul class="{nav_class}"></ul>
        <div class="cart-icon"><span class="cart-count">{count}</span></div>
    </nav>
</header>
<main>
    <section class="products" data-category="{category}">
        <div class="products-grid">
{grid}
        </div>
    </section>
{testimonials}
{newsletter}
</main>
<div class="cart-modal" style="display: {modal_style}">
    <div class="{modal_content_class}">
        <div class="cart-items">
{items}
        </div>
        <div class="cart-total">Total: <span class="total-price">{total}</span></div>
        <button class="btn checkout-btn">Checkout</button>
    </div>
</div>
{notification}
</body>"#,
            count = self.cart.count_text,
            category = self.filter.as_str(),
            grid = self.product_grid,
            testimonials = self.testimonials,
            newsletter = self.newsletter,
            items = self.cart.items_html,
            total = self.cart.total_text,
            notification = self.notification.as_deref().unwrap_or_default(),
        )
    }
}

/// The storefront page.
pub struct Storefront<S> {
    config: StorefrontConfig,
    cart: CartManager<S>,
    cart_view: Rc<RefCell<CartView>>,
    filter: CategoryFilter,
    scheduler: Scheduler,
    notifications: NotificationCenter,
    modal: CartModal,
    nav: MobileNav,
    testimonials: TestimonialsContent,
    carousel: TestimonialCarousel,
    newsletter: NewsletterForm,
    checkout: Checkout,
}

impl Storefront<FileStore> {
    /// Open a storefront persisting to the configured directory.
    pub fn open(config: StorefrontConfig, catalog: Catalog) -> Result<Self> {
        let store = FileStore::open(config.storage.dir.clone()).with_context(|| {
            format!(
                "Failed to open cart storage: {}",
                config.storage.dir.display()
            )
        })?;
        Ok(Self::new(config, catalog, store))
    }
}

impl<S: KeyValueStore> Storefront<S> {
    /// Load the persisted cart, render it, and start the testimonial slider.
    pub fn new(config: StorefrontConfig, catalog: Catalog, store: S) -> Self {
        let mut cart = CartManager::load_with_key(catalog, store, config.storage.key.clone());

        let cart_view = Rc::new(RefCell::new(CartView::default()));
        cart_view.borrow_mut().refresh(cart.summary());
        let view = Rc::clone(&cart_view);
        cart.subscribe(move |event| match event {
            CartEvent::Changed(summary) => view.borrow_mut().refresh(summary.clone()),
        });

        let timings = &config.timings;
        let mut scheduler = Scheduler::new();
        let testimonials = TestimonialsContent::default().truncated(config.testimonial_count);
        let mut carousel = TestimonialCarousel::new(testimonials.len());
        carousel.start(timings.carousel_interval(), &mut scheduler);

        tracing::info!(
            storage_key = %config.storage.key,
            items = cart.item_count(),
            "storefront ready"
        );

        Self {
            notifications: NotificationCenter::new(timings),
            modal: CartModal::new(timings.enter(), timings.exit()),
            config,
            cart,
            cart_view,
            filter: CategoryFilter::All,
            scheduler,
            nav: MobileNav::new(),
            testimonials,
            carousel,
            newsletter: NewsletterForm::new(),
            checkout: Checkout::new(),
        }
    }

    /// Apply a UI event.
    pub fn handle(&mut self, event: UiEvent) {
        tracing::debug!(?event, "ui event");
        match event {
            UiEvent::AddToCart(id) => {
                let notification = self.cart.add(id);
                self.notify(notification);
            }
            UiEvent::DecrementQuantity(id) => {
                if let Some(notification) = self.cart.remove(id) {
                    self.notify(notification);
                }
            }
            UiEvent::RemoveLine(id) => {
                if let Some(notification) = self.cart.remove_all(id) {
                    self.notify(notification);
                }
            }
            UiEvent::FilterCategory(filter) => self.filter = filter,
            UiEvent::ToggleMobileMenu => {
                self.nav.toggle();
            }
            UiEvent::OpenCart => self.modal.open(&mut self.scheduler),
            UiEvent::CloseCart => self.modal.close(&mut self.scheduler),
            UiEvent::BackdropClicked => self.modal.backdrop_clicked(&mut self.scheduler),
            UiEvent::Checkout => {
                let delay = self.config.timings.checkout_delay();
                let empty = self.cart.cart().is_empty();
                if let Some(notification) = self.checkout.start(empty, delay, &mut self.scheduler) {
                    self.notify(notification);
                }
            }
            UiEvent::SubmitNewsletter(email) => {
                let delay = self.config.timings.newsletter_delay();
                if let Some(notification) = self.newsletter.submit(&email, delay, &mut self.scheduler)
                {
                    self.notify(notification);
                }
            }
            UiEvent::SelectTestimonial(index) => self.carousel.select(index, &mut self.scheduler),
            UiEvent::DismissNotification => {
                self.notifications.dismiss(&mut self.scheduler);
            }
        }
    }

    /// Let `elapsed` of virtual time pass, running every timer that comes due.
    pub fn tick(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(fired) = self.scheduler.next_due(until) {
            self.on_timer(fired.task);
        }
        self.scheduler.advance_to(until);
    }

    fn on_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::RevealNotification(_)
            | TimerTask::DismissNotification(_)
            | TimerTask::RemoveNotification(_) => {
                self.notifications.on_timer(task, &mut self.scheduler)
            }
            TimerTask::FinishModalOpen | TimerTask::FinishModalClose => self.modal.on_timer(task),
            TimerTask::AdvanceTestimonial => self.carousel.on_timer(task),
            TimerTask::CompleteCheckout => {
                let notification = self.checkout.complete();
                self.notify(notification);
                self.cart.clear();
                self.modal.close(&mut self.scheduler);
            }
            TimerTask::CompleteNewsletter => {
                let notification = self.newsletter.complete();
                self.notify(notification);
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.show(notification, &mut self.scheduler);
    }

    /// Products passing the active category filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.cart.catalog().filter(self.filter)
    }

    /// Render the whole page.
    pub fn view(&self) -> PageView {
        PageView {
            filter: self.filter,
            product_grid: render_product_grid(&self.visible_products()),
            cart: self.cart_view.borrow().clone(),
            modal: self.modal.state(),
            nav_open: self.nav.is_open(),
            notification: self.notifications.current().map(render_notification),
            testimonials: render_testimonials(&self.testimonials, self.carousel.current()),
            newsletter: render_newsletter(&self.newsletter),
        }
    }

    pub fn cart(&self) -> &CartManager<S> {
        &self.cart
    }

    /// Direct access to the cart manager. Changes made through it still
    /// refresh the cart view.
    pub fn cart_mut(&mut self) -> &mut CartManager<S> {
        &mut self.cart
    }

    /// Cart markup as last refreshed by the change subscription.
    pub fn cart_view(&self) -> CartView {
        self.cart_view.borrow().clone()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn notification(&self) -> Option<&Toast> {
        self.notifications.current()
    }

    pub fn modal_state(&self) -> ModalState {
        self.modal.state()
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn carousel(&self) -> &TestimonialCarousel {
        &self.carousel
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn checkout_pending(&self) -> bool {
        self.checkout.is_pending()
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archiply_cache::MemoryStore;
    use archiply_commerce::catalog::Category;
    use archiply_commerce::Severity;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn storefront() -> Storefront<MemoryStore> {
        Storefront::new(
            StorefrontConfig::default(),
            Catalog::furniture(),
            MemoryStore::new(),
        )
    }

    fn message(storefront: &Storefront<MemoryStore>) -> Option<(&str, Severity)> {
        storefront
            .notification()
            .map(|t| (t.notification.message.as_str(), t.notification.severity))
    }

    #[test]
    fn test_add_refreshes_view_and_notifies() {
        let mut sf = storefront();
        assert_eq!(sf.cart_view().renders, 1);

        sf.handle(UiEvent::AddToCart(ProductId::new(1)));
        sf.handle(UiEvent::AddToCart(ProductId::new(1)));

        let view = sf.cart_view();
        assert_eq!(view.renders, 3);
        assert_eq!(view.count_text, "2");
        assert_eq!(view.total_text, "$1598.00");
        assert_eq!(
            message(&sf),
            Some(("Modern Sofa added to cart!", Severity::Success))
        );
    }

    #[test]
    fn test_unknown_product() {
        let mut sf = storefront();
        sf.handle(UiEvent::AddToCart(ProductId::new(99)));

        assert_eq!(message(&sf), Some(("Product not found", Severity::Error)));
        assert_eq!(sf.cart_view().renders, 1);
        assert!(sf.cart().cart().is_empty());
    }

    #[test]
    fn test_decrement_and_remove_line() {
        let mut sf = storefront();
        sf.handle(UiEvent::AddToCart(ProductId::new(2)));
        sf.handle(UiEvent::AddToCart(ProductId::new(2)));
        sf.handle(UiEvent::AddToCart(ProductId::new(3)));

        sf.handle(UiEvent::DecrementQuantity(ProductId::new(2)));
        assert_eq!(message(&sf), Some(("Item removed from cart", Severity::Info)));
        assert_eq!(sf.cart_view().count_text, "2");

        sf.handle(UiEvent::RemoveLine(ProductId::new(3)));
        assert_eq!(
            message(&sf),
            Some(("Dining Table removed from cart", Severity::Info))
        );
        assert_eq!(sf.cart_view().total_text, "$999.00");

        let renders = sf.cart_view().renders;
        sf.handle(UiEvent::RemoveLine(ProductId::new(3)));
        assert_eq!(sf.cart_view().renders, renders);
    }

    #[test]
    fn test_filter_category() {
        let mut sf = storefront();
        sf.handle(UiEvent::FilterCategory(CategoryFilter::Only(Category::Office)));

        let products = sf.visible_products();
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Office Desk", "Ergonomic Chair"]);
        assert!(sf.view().product_grid.contains("Office Desk"));
    }

    #[test]
    fn test_empty_category_renders_message() {
        let catalog = Catalog::new(vec![Product::new(
            1,
            "Modern Sofa",
            archiply_commerce::Money::from_units(799),
            Category::LivingRoom,
        )])
        .unwrap();
        let mut sf = Storefront::new(StorefrontConfig::default(), catalog, MemoryStore::new());
        sf.handle(UiEvent::FilterCategory(CategoryFilter::Only(Category::Bedroom)));

        assert!(sf
            .view()
            .product_grid
            .contains("No products found in this category."));
    }

    #[test]
    fn test_checkout_flow() {
        let mut sf = storefront();
        sf.handle(UiEvent::AddToCart(ProductId::new(1)));
        sf.handle(UiEvent::OpenCart);
        sf.tick(ms(10));
        assert_eq!(sf.modal_state(), ModalState::Open);

        sf.handle(UiEvent::Checkout);
        assert_eq!(
            message(&sf),
            Some(("Processing your order...", Severity::Info))
        );
        sf.handle(UiEvent::Checkout);
        assert!(sf.checkout_pending());

        sf.tick(ms(1999));
        assert_eq!(sf.cart().item_count(), 1);

        sf.tick(ms(1));
        assert_eq!(
            message(&sf),
            Some(("Order placed successfully!", Severity::Success))
        );
        assert!(sf.cart().cart().is_empty());
        assert_eq!(sf.cart_view().count_text, "0");
        assert_eq!(sf.modal_state(), ModalState::Closing);

        sf.tick(ms(300));
        assert_eq!(sf.modal_state(), ModalState::Hidden);
        assert!(!sf.checkout_pending());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut sf = storefront();
        sf.handle(UiEvent::Checkout);
        assert_eq!(message(&sf), Some(("Your cart is empty", Severity::Error)));
        assert!(!sf.checkout_pending());
    }

    #[test]
    fn test_newsletter_flow() {
        let mut sf = storefront();
        sf.handle(UiEvent::SubmitNewsletter("".to_string()));
        assert_eq!(
            message(&sf),
            Some(("Please enter your email address", Severity::Error))
        );

        sf.handle(UiEvent::SubmitNewsletter("nope".to_string()));
        assert_eq!(
            message(&sf),
            Some(("Please enter a valid email address", Severity::Error))
        );

        sf.handle(UiEvent::SubmitNewsletter("Jane@Example.com".to_string()));
        assert_eq!(sf.newsletter().input(), "Jane@Example.com");
        sf.tick(ms(1000));
        assert_eq!(
            message(&sf),
            Some(("Thank you for subscribing to our newsletter!", Severity::Success))
        );
        assert_eq!(sf.newsletter().input(), "");
    }

    #[test]
    fn test_notification_auto_dismiss() {
        let mut sf = storefront();
        sf.handle(UiEvent::AddToCart(ProductId::new(4)));
        sf.tick(ms(3000));
        assert!(sf.notification().is_some());
        sf.tick(ms(300));
        assert!(sf.notification().is_none());

        sf.handle(UiEvent::AddToCart(ProductId::new(4)));
        sf.handle(UiEvent::DismissNotification);
        sf.tick(ms(300));
        assert!(sf.notification().is_none());
    }

    #[test]
    fn test_carousel_and_nav() {
        let mut sf = storefront();
        sf.tick(ms(5000));
        assert_eq!(sf.carousel().current(), 1);

        sf.handle(UiEvent::SelectTestimonial(0));
        sf.tick(ms(20_000));
        assert_eq!(sf.carousel().current(), 0);

        sf.handle(UiEvent::ToggleMobileMenu);
        assert!(sf.nav_open());
        assert!(sf.view().to_html().contains(r#"<ul class="nav-links active">"#));
    }

    #[test]
    fn test_direct_clear_refreshes_view() {
        let mut sf = storefront();
        sf.handle(UiEvent::AddToCart(ProductId::new(5)));
        sf.cart_mut().clear();

        assert_eq!(sf.cart_view().count_text, "0");
        assert!(sf.view().cart.items_html.contains("Your cart is empty"));
    }

    #[test]
    fn test_backdrop_closes_modal() {
        let mut sf = storefront();
        sf.handle(UiEvent::OpenCart);
        sf.tick(ms(10));
        sf.handle(UiEvent::BackdropClicked);
        sf.tick(ms(300));
        assert_eq!(sf.modal_state(), ModalState::Hidden);
    }

    #[test]
    fn test_cart_survives_reload() {
        let store = MemoryStore::new();
        let mut first = Storefront::new(StorefrontConfig::default(), Catalog::furniture(), store.clone());
        first.handle(UiEvent::AddToCart(ProductId::new(6)));
        first.handle(UiEvent::AddToCart(ProductId::new(6)));

        let second = Storefront::new(StorefrontConfig::default(), Catalog::furniture(), store);
        assert_eq!(second.cart_view().count_text, "2");
        assert_eq!(second.cart_view().total_text, "$558.00");
        assert!(second.view().to_html().contains(r#"<span class="cart-count">2</span>"#));
    }

    #[test]
    fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.storage.dir = dir.path().join("carts");

        let mut sf = Storefront::open(config.clone(), Catalog::furniture()).unwrap();
        sf.handle(UiEvent::AddToCart(ProductId::new(8)));

        let reopened = Storefront::open(config, Catalog::furniture()).unwrap();
        assert_eq!(reopened.cart().item_count(), 1);
        assert!(dir.path().join("carts").join("archiply_cart").exists());
    }
}
