//! Document chrome shared by every page: head, navigation bar, footer.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use ajil_core::route::Route;

use super::assets::LOGO;

/// Wrap `body` in the full document.
pub(super) fn document(title: &str, active: Option<Route>, body: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-GB" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width,initial-scale=1";
                title { (title) " | Ajil's Oils" }
                link rel="icon" href=(LOGO);
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                (navbar(active))
                main class="main" data-route=[active.map(Route::slug)] {
                    (body)
                }
                (footer())
            }
        }
    }
}

fn navbar(active: Option<Route>) -> Markup {
    html! {
        nav class="nav" {
            div class="nav-inner" {
                a href="/" class="nav-logo" {
                    img src=(LOGO) alt="" width="44" height="44";
                    span { "Ajil's Oils" }
                }
                div class="nav-links" {
                    @for route in Route::ALL {
                        @if active == Some(route) {
                            a href=(route.path()) class="nav-link active" aria-current="page" { (route.label()) }
                        } @else {
                            a href=(route.path()) class="nav-link" { (route.label()) }
                        }
                    }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="footer-grid" {
                div {
                    h3 class="footer-brand" { "Ajil's Oils" }
                    p { "Your trusted partner for professional cooking oil management. Fast, flexible service when you need it. Sustainable, compliant, reliable." }
                }
                div {
                    h4 { "Services" }
                    ul {
                        li { a href=(Route::Services.path()) { "Used Oil Collection" } }
                        li { a href=(Route::FreshOil.path()) { "Fresh Oil Supply" } }
                        li { a href=(Route::Compliance.path()) { "Compliance Support" } }
                    }
                }
                div {
                    h4 { "Industries" }
                    ul {
                        @for industry in ["Restaurants", "Takeaways", "Food Manufacturers", "Hospitality Groups"] {
                            li { (industry) }
                        }
                    }
                }
                div {
                    h4 { "Get in Touch" }
                    ul {
                        li { a href="mailto:info@ajilsoils.com" { "info@ajilsoils.com" } }
                        li { "+44 XXXX XXXXXX" }
                        li { "United Kingdom" }
                    }
                }
            }
            div class="footer-bottom" {
                span { "© 2024 Ajil's Oils. All rights reserved." }
                span { "Building a sustainable future, one drop at a time." }
            }
        }
    }
}

const SITE_CSS: &str = r"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:'Inter',system-ui,-apple-system,sans-serif;background:linear-gradient(135deg,#f3fbf5 0%,#fff 50%,#f0faf5 100%);color:#111827;min-height:100vh;display:flex;flex-direction:column;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
.nav{position:sticky;top:0;z-index:50;background:rgba(255,255,255,.98);border-bottom:1px solid #dcfce7;box-shadow:0 8px 24px rgba(22,101,52,.06)}
.nav-inner{max-width:1200px;margin:0 auto;padding:20px 32px;display:flex;justify-content:space-between;align-items:center}
.nav-logo{display:flex;align-items:center;gap:12px;font-size:26px;font-weight:900;color:#15803d}
.nav-logo img{border-radius:14px}
.nav-links{display:flex;gap:36px;font-size:14px;font-weight:700}
.nav-link{position:relative;padding:8px 0;color:#4b5563;transition:color .2s}
.nav-link:hover{color:#16a34a}
.nav-link.active{color:#15803d}
.nav-link.active::after{content:'';position:absolute;left:0;right:0;bottom:0;height:4px;border-radius:4px;background:linear-gradient(90deg,#16a34a,#22c55e,#059669)}
.main{flex-grow:1}
.page{max-width:1200px;margin:0 auto;padding:112px 32px}
.narrow{max-width:720px}
.center{text-align:center}
.eyebrow{color:#16a34a;font-weight:700;font-size:13px;text-transform:uppercase;letter-spacing:.06em}
.page-title{font-size:56px;font-weight:900;margin:16px 0 28px;letter-spacing:-1px;color:#14532d}
.lead{font-size:20px;color:#4b5563;line-height:1.7;max-width:820px;margin:0 auto 64px}
.hero{background:linear-gradient(135deg,#16a34a,#22c55e,#059669);color:#fff}
.hero-inner{max-width:1200px;margin:0 auto;padding:140px 32px}
.hero h1{font-size:64px;font-weight:900;line-height:1.1;margin-bottom:28px}
.hero h1 span{display:block;color:#dcfce7}
.hero p{font-size:22px;line-height:1.6;max-width:760px;margin-bottom:44px;color:rgba(255,255,255,.95)}
.pill{display:inline-flex;gap:10px;align-items:center;background:rgba(255,255,255,.2);border:1px solid rgba(255,255,255,.3);padding:10px 22px;border-radius:999px;font-weight:700;font-size:14px;margin-bottom:28px}
.actions{display:flex;flex-wrap:wrap;gap:20px}
.btn{display:inline-flex;align-items:center;gap:10px;padding:18px 36px;border-radius:16px;font-weight:700;font-size:16px;border:none;cursor:pointer;transition:transform .2s,box-shadow .2s}
.btn:hover{transform:scale(1.04)}
.btn-primary{background:linear-gradient(90deg,#16a34a,#22c55e,#059669);color:#fff;box-shadow:0 12px 28px rgba(22,163,74,.25)}
.btn-white{background:#fff;color:#15803d;box-shadow:0 12px 28px rgba(0,0,0,.12)}
.btn-ghost{background:rgba(255,255,255,.1);color:#fff;border:2px solid rgba(255,255,255,.5)}
.btn[disabled]{opacity:.6;cursor:progress}
.stats{display:grid;grid-template-columns:repeat(3,1fr);gap:48px;margin-top:80px;padding-top:48px;border-top:1px solid rgba(255,255,255,.3);text-align:center}
.stat-value{font-size:48px;font-weight:900}
.stat-label{color:#dcfce7;font-weight:600}
.section{max-width:1200px;margin:0 auto;padding:112px 32px}
.section-tint{background:linear-gradient(135deg,#f0fdf4,#ecfdf5)}
.section h2{font-size:44px;font-weight:900;margin:14px 0 20px;color:#111827}
.section-head{text-align:center;margin-bottom:72px}
.section-head p{font-size:19px;color:#4b5563;max-width:760px;margin:0 auto}
.grid{display:grid;gap:36px}
.grid-2{grid-template-columns:repeat(2,1fr)}
.grid-3{grid-template-columns:repeat(3,1fr)}
.grid-4{grid-template-columns:repeat(4,1fr)}
.card{background:#fff;border:1px solid rgba(220,252,231,.6);border-radius:28px;padding:40px;box-shadow:0 24px 48px rgba(17,24,39,.08);transition:transform .4s,box-shadow .4s}
.card:hover{transform:translateY(-10px);box-shadow:0 28px 56px rgba(22,163,74,.16)}
.card h3{font-size:22px;font-weight:800;margin-bottom:14px;color:#111827}
.card p{color:#4b5563;line-height:1.7}
.card-step{font-size:56px;font-weight:900;color:#dcfce7;text-align:center}
.checks{list-style:none;margin-top:20px}
.checks li{padding:6px 0 6px 30px;position:relative;color:#374151;font-weight:500}
.checks li::before{content:'\2713';position:absolute;left:0;color:#16a34a;font-weight:900}
.panel{background:linear-gradient(135deg,#f0fdf4,#ecfdf5);border:2px solid #dcfce7;border-radius:28px;padding:64px;margin-top:80px}
.panel h2{font-size:36px;font-weight:900;text-align:center;margin-bottom:40px}
.product{display:flex;flex-direction:column;gap:18px}
.product img{width:100%;height:180px;object-fit:cover;border-radius:18px;background:#dcfce7}
.product h3{font-size:28px;color:#15803d}
.provide{display:flex;flex-direction:column;gap:24px;max-width:860px;margin:0 auto}
.provide-item{background:#fff;border-radius:18px;padding:28px 32px;box-shadow:0 12px 28px rgba(17,24,39,.06)}
.provide-item h4{font-size:20px;margin-bottom:8px}
.provide-item p{color:#4b5563;line-height:1.7}
.cta{background:linear-gradient(135deg,#15803d,#16a34a,#059669);color:#fff;text-align:center;padding:120px 32px}
.cta h2{font-size:56px;font-weight:900;margin-bottom:20px;color:#fff}
.cta p{font-size:22px;color:rgba(255,255,255,.9);margin-bottom:44px}
.contact-grid{display:grid;grid-template-columns:1fr 1.2fr;gap:40px;text-align:left}
.contact-info dt{font-weight:800;font-size:17px;margin-top:22px}
.contact-info dd{color:#4b5563}
.form{display:flex;flex-direction:column;gap:20px}
.form label{display:flex;flex-direction:column;gap:8px;font-weight:700;font-size:14px;color:#374151}
.form input,.form select,.form textarea{font:inherit;font-weight:400;padding:14px 16px;border:1px solid #d1d5db;border-radius:12px;background:#fff}
.form input:focus,.form select:focus,.form textarea:focus{outline:2px solid #22c55e;border-color:transparent}
.form textarea{min-height:140px;resize:vertical}
.notice{border-radius:16px;padding:20px 24px;font-weight:600}
.notice-success{background:#dcfce7;color:#14532d}
.notice-error{background:#fee2e2;color:#7f1d1d}
.notice-pending{background:#f3f4f6;color:#374151}
.reset-form{margin-top:24px}
.footer{background:linear-gradient(135deg,#14532d,#166534,#064e3b);color:#fff;margin-top:128px}
.footer-grid{max-width:1200px;margin:0 auto;padding:80px 32px;display:grid;grid-template-columns:repeat(4,1fr);gap:56px}
.footer-brand{font-size:24px;font-weight:900;margin-bottom:20px}
.footer h4{font-size:18px;margin-bottom:20px}
.footer p,.footer li{color:#dcfce7;font-size:14px;line-height:1.7}
.footer ul{list-style:none;display:flex;flex-direction:column;gap:12px}
.footer-bottom{border-top:1px solid rgba(21,128,61,.5);max-width:1200px;margin:0 auto;padding:28px 32px;display:flex;justify-content:space-between;font-size:14px;color:#bbf7d0}
@media(max-width:900px){.grid-2,.grid-3,.grid-4,.footer-grid,.contact-grid{grid-template-columns:1fr}.nav-links{gap:16px;flex-wrap:wrap}.hero h1,.page-title{font-size:40px}}
";
