//! HTML rendering for the site.
//!
//! Pages are assembled with `maud` the same way for every route: document
//! head, navigation bar with the active route marked, exactly one page block
//! inside `<main>`, then the footer. Interpolated values are escaped by the
//! `html!` macro. Nothing here holds state; callers pass in the route and the
//! contact session to render.

mod assets;
mod contact;
mod layout;
mod pages;

use axum::http::StatusCode;
use maud::{Markup, html};

use ajil_core::route::Route;
use ajil_core::submission::ContactSession;

pub use assets::{LOGO, PRODUCT_PHOTOS};
pub use contact::{ERROR_MESSAGE, SUCCESS_MESSAGE};

/// Render the full document for `route`.
///
/// `contact` is only consulted for [`Route::Contact`]; `None` there renders
/// an idle, empty form.
pub fn render(route: Route, contact: Option<&ContactSession>) -> Markup {
    let body = match route {
        Route::Home => pages::home(),
        Route::Services => pages::services(),
        Route::FreshOil => pages::fresh_oil(),
        Route::Compliance => pages::compliance(),
        Route::Contact => contact::page(contact),
    };
    layout::document(page_title(route), Some(route), &body)
}

/// Render an error page inside the site chrome. No route is marked active.
pub fn error_page(status: StatusCode, title: &str, message: &str) -> Markup {
    let body = html! {
        section class="page narrow center error-page" {
            span class="eyebrow" { (status.as_str()) }
            h1 class="page-title" { (title) }
            p class="lead" { (message) }
            a class="btn btn-primary" href="/" { "Back to home" }
        }
    };
    layout::document(title, None, &body)
}

fn page_title(route: Route) -> &'static str {
    match route {
        Route::Home => "Professional Cooking Oil Management",
        Route::Services => "Used Cooking Oil Collection",
        Route::FreshOil => "Fresh Cooking Oil Supply",
        Route::Compliance => "Compliance",
        Route::Contact => "Contact",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_route_renders_one_main_block() {
        for route in Route::ALL {
            let html = render(route, None).into_string();
            assert_eq!(html.matches("<main").count(), 1, "{route}");
            assert!(html.contains(&format!(r#"data-route="{}""#, route.slug())));
        }
    }

    #[test]
    fn active_route_is_marked_in_nav() {
        let html = render(Route::FreshOil, None).into_string();
        assert!(html.contains(r#"<a href="/fresh-oil" class="nav-link active" aria-current="page">"#));
        assert!(html.contains(r#"<a href="/services" class="nav-link">"#));
    }

    #[test]
    fn error_page_has_no_active_route() {
        let html = error_page(StatusCode::NOT_FOUND, "Page not found", "unknown route 'x'")
            .into_string();
        assert!(!html.contains("aria-current"));
        assert!(!html.contains("data-route"));
        assert!(html.contains("unknown route 'x'"));
    }

    #[test]
    fn error_message_markup_is_escaped() {
        let html = error_page(
            StatusCode::BAD_REQUEST,
            "Bad request",
            r#"<script>alert("x")</script> & more"#,
        )
        .into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
    }
}
