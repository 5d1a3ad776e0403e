use handlebars::Handlebars;
use std::sync::Arc;

pub type Hbs = Arc<Handlebars<'static>>;

pub fn build_handlebars() -> Hbs {
    let mut hb = Handlebars::new();

    // Layout + pages
    hb.register_template_file("layouts/base", "templates/layouts/base.hbs")
        .expect("template layouts/base");

    hb.register_template_file("pages/explore", "templates/pages/explore.hbs")
        .expect("template pages/explore");
    hb.register_template_file("pages/trade", "templates/pages/trade.hbs")
        .expect("template pages/trade");
    hb.register_template_file("pages/orders", "templates/pages/orders.hbs")
        .expect("template pages/orders");
    hb.register_template_file("pages/orders_export", "templates/pages/orders_export.hbs")
        .expect("template pages/orders_export");
    hb.register_template_file("pages/not_found", "templates/pages/not_found.hbs")
        .expect("template pages/not_found");

    // Partial endpoints
    hb.register_template_file("partials/search_results", "templates/partials/search_results.hbs")
        .expect("template partials/search_results");

    let navbar = std::fs::read_to_string("templates/partials/navbar.hbs")
        .expect("partials/navbar.hbs");
    hb.register_partial("navbar", navbar).expect("register navbar partial");

    Arc::new(hb)
}
