//! Static page blocks: home, used oil collection, fresh oil, compliance.
//!
//! Copy lives in small const tables; the functions below lay the tables out
//! as card grids.

use maud::{Markup, html};

use ajil_core::route::Route;

use super::assets::product_photo;

struct Feature {
    title: &'static str,
    desc: &'static str,
}

struct Offering {
    title: &'static str,
    desc: &'static str,
    points: [&'static str; 3],
}

struct Step {
    step: &'static str,
    title: &'static str,
    desc: &'static str,
}

const STATS: [(&str, &str); 3] = [
    ("500+", "Businesses Served"),
    ("100%", "Compliance Rate"),
    ("15+", "Years Experience"),
];

const WHY_US: [Feature; 6] = [
    Feature {
        title: "Fully Compliant",
        desc: "Registered waste carrier with complete documentation, waste transfer notes, and audit-ready records for total peace of mind.",
    },
    Feature {
        title: "Rapid & Flexible",
        desc: "Delivery within 1-2 days when you need it urgently. Custom schedules, after-hours service, and responsive support that sets us apart.",
    },
    Feature {
        title: "Sustainable Practice",
        desc: "100% of used oil recycled into biodiesel and renewable fuels, supporting your environmental commitments.",
    },
    Feature {
        title: "Premium Quality",
        desc: "Food-grade oils that meet the highest standards, sourced and delivered with care for consistent performance.",
    },
    Feature {
        title: "Expert Support",
        desc: "Dedicated account management and responsive customer service whenever you need assistance.",
    },
    Feature {
        title: "Tailored Solutions",
        desc: "Custom service plans designed around your business size, volume, and specific operational requirements.",
    },
];

const STEPS: [Step; 4] = [
    Step {
        step: "01",
        title: "Contact Us",
        desc: "Reach out for a free, no-obligation quote tailored to your business",
    },
    Step {
        step: "02",
        title: "Setup Service",
        desc: "We arrange collection schedules and supply plans that fit your needs",
    },
    Step {
        step: "03",
        title: "We Deliver",
        desc: "Professional collections and fresh oil deliveries, with fast turnaround when you need it",
    },
    Step {
        step: "04",
        title: "Stay Compliant",
        desc: "Complete documentation and reporting for audits and inspections",
    },
];

const INDUSTRIES: [Feature; 3] = [
    Feature {
        title: "Restaurants",
        desc: "Fine dining to casual eateries",
    },
    Feature {
        title: "Takeaways",
        desc: "Fast food and quick service",
    },
    Feature {
        title: "Food Manufacturers",
        desc: "Large-scale production facilities",
    },
];

const COLLECTION: [Offering; 3] = [
    Offering {
        title: "Flexible Scheduling",
        desc: "Same-week service available when you're in a pinch, plus regular weekly, bi-weekly, or monthly schedules tailored to your needs.",
        points: ["Rush service (1-2 days)", "Custom schedules", "After-hours options"],
    },
    Offering {
        title: "Fully Compliant",
        desc: "Complete regulatory compliance with all UK waste management legislation and environmental standards.",
        points: ["Waste transfer notes", "Licensed carrier", "Audit-ready records"],
    },
    Offering {
        title: "100% Recycled",
        desc: "Every drop of used oil is converted into biodiesel and renewable fuels, supporting a circular economy.",
        points: ["Sustainable process", "Carbon reduction", "Environmental reports"],
    },
];

const SUPPLY_BENEFITS: [Feature; 3] = [
    Feature {
        title: "Premium Quality",
        desc: "Food-grade oils that meet the highest standards for taste, performance, and safety in commercial kitchens.",
    },
    Feature {
        title: "Fast & Scheduled Delivery",
        desc: "Quick turnaround (1-2 days) when you run out unexpectedly, plus regular scheduled deliveries aligned with your usage.",
    },
    Feature {
        title: "Complete Solution",
        desc: "Fresh oil supply and used oil collection from one trusted partner simplifies your operations.",
    },
];

const PRODUCTS: [Offering; 2] = [
    Offering {
        title: "Vegetable Oil",
        desc: "Versatile all-purpose oil perfect for frying, cooking, and baking. Ideal for diverse menu requirements.",
        points: ["High quality", "Food-grade certified", "20L containers"],
    },
    Offering {
        title: "Rapeseed Oil",
        desc: "Premium oil with high smoke point, specifically designed for deep frying and high-heat cooking.",
        points: ["High smoke point", "Long-lasting", "Bulk delivery available"],
    },
];

const CERTIFICATIONS: [Feature; 4] = [
    Feature {
        title: "Licensed Waste Carrier",
        desc: "Fully registered and compliant with all UK Environment Agency requirements and waste carrier regulations.",
    },
    Feature {
        title: "Complete Documentation",
        desc: "Waste transfer notes, collection records, and audit-ready paperwork provided for every single collection.",
    },
    Feature {
        title: "Industry Standards",
        desc: "Meeting and exceeding all environmental regulations, health and safety standards, and industry best practices.",
    },
    Feature {
        title: "Environmental Compliance",
        desc: "Certified recycling processes ensuring proper waste management and full environmental protection.",
    },
];

const PROVISIONS: [Feature; 4] = [
    Feature {
        title: "Waste Transfer Notes",
        desc: "Complete documentation for every collection, ensuring full legal compliance and providing a complete audit trail.",
    },
    Feature {
        title: "Duty of Care Compliance",
        desc: "Meeting all legal obligations for waste producers under UK environmental law and waste management regulations.",
    },
    Feature {
        title: "Full Traceability",
        desc: "Comprehensive tracking from point of collection to final recycling destination with detailed records maintained.",
    },
    Feature {
        title: "Regular Reporting",
        desc: "Collection reports, environmental impact statements, and compliance documentation available on request.",
    },
];

// ── Building blocks ──────────────────────────────────────────────────

fn page_header(eyebrow: &str, title: &str, lead: &str) -> Markup {
    html! {
        div class="center" {
            span class="eyebrow" { (eyebrow) }
            h1 class="page-title" { (title) }
            p class="lead" { (lead) }
        }
    }
}

fn section_head(eyebrow: &str, title: &str, lead: &str) -> Markup {
    html! {
        div class="section-head" {
            span class="eyebrow" { (eyebrow) }
            h2 { (title) }
            p { (lead) }
        }
    }
}

fn feature_grid(columns: u8, features: &[Feature]) -> Markup {
    html! {
        div class=(format!("grid grid-{columns}")) {
            @for f in features {
                div class="card" {
                    h3 { (f.title) }
                    p { (f.desc) }
                }
            }
        }
    }
}

fn checks(points: &[&str]) -> Markup {
    html! {
        ul class="checks" {
            @for point in points {
                li { (point) }
            }
        }
    }
}

fn link_button(route: Route, class: &str, label: &str) -> Markup {
    html! {
        a href=(route.path()) class=(format!("btn {class}")) { (label) }
    }
}

// ── Pages ────────────────────────────────────────────────────────────

pub(super) fn home() -> Markup {
    html! {
        section class="hero" {
            div class="hero-inner" {
                div class="pill" { "Delivery Within 1-2 Days When You Need It" }
                h1 { "Professional Cooking Oil" span { "Management Services" } }
                p {
                    "Complete used cooking oil collection and premium fresh oil supply. "
                    "We deliver within 1-2 days when you're in a pinch. Flexible service for restaurants, "
                    "takeaways, and food manufacturers. Sustainable. Compliant. Reliable."
                }
                div class="actions" {
                    (link_button(Route::Contact, "btn-white", "Get Free Quote →"))
                    (link_button(Route::Services, "btn-ghost", "Our Services"))
                }
                div class="stats" {
                    @for (value, label) in STATS {
                        div {
                            div class="stat-value" { (value) }
                            div class="stat-label" { (label) }
                        }
                    }
                }
            }
        }

        section class="section" {
            (section_head(
                "Why Ajil's Oils",
                "The Complete Oil Management Solution",
                "We combine reliability, sustainability, and compliance to deliver exceptional service that keeps your kitchen running smoothly.",
            ))
            (feature_grid(3, &WHY_US))
        }

        section class="section-tint" {
            div class="section" {
                (section_head(
                    "Simple Process",
                    "How It Works",
                    "Getting started is easy. We handle everything from setup to ongoing service.",
                ))
                div class="grid grid-4" {
                    @for s in &STEPS {
                        div class="card" {
                            div class="card-step" { (s.step) }
                            h3 { (s.title) }
                            p { (s.desc) }
                        }
                    }
                }
            }
        }

        section class="section" {
            (section_head(
                "Our Clients",
                "Who We Serve",
                "Trusted by businesses across the hospitality and food production sectors",
            ))
            (feature_grid(3, &INDUSTRIES))
        }

        section class="cta" {
            div class="pill" { "Join Hundreds of Satisfied Clients" }
            h2 { "Ready to Get Started?" }
            p { "Request a free quote today and discover how we can simplify your cooking oil management." }
            (link_button(Route::Contact, "btn-white", "Contact Us Today →"))
        }
    }
}

pub(super) fn services() -> Markup {
    html! {
        section class="page" {
            (page_header(
                "Our Services",
                "Used Cooking Oil Collection",
                "Professional, compliant, and sustainable used cooking oil collection services designed to keep your business running smoothly while supporting environmental responsibility.",
            ))
            div class="grid grid-3" {
                @for o in &COLLECTION {
                    div class="card" {
                        h3 { (o.title) }
                        p { (o.desc) }
                        (checks(&o.points))
                    }
                }
            }
            div class="panel center" {
                h2 { "Complete Peace of Mind" }
                p class="lead" style="margin-bottom:0" {
                    "Our used cooking oil collection service handles everything from initial setup to ongoing collections, "
                    "documentation, and environmental reporting. Focus on your business while we take care of your waste oil management needs."
                }
            }
        }
    }
}

pub(super) fn fresh_oil() -> Markup {
    html! {
        section class="page" {
            (page_header(
                "Fresh Oil Supply",
                "Premium Fresh Cooking Oil",
                "High-quality food-grade cooking oils delivered on schedule, or within 1-2 days when you're running low. Flexible service that keeps your kitchen running. Combine with our collection service for a complete solution.",
            ))
            (feature_grid(3, &SUPPLY_BENEFITS))
            div class="panel" {
                h2 { "Product Range" }
                div class="grid grid-2" {
                    @for product in &PRODUCTS {
                        div class="card product" {
                            @if let Some(photo) = product_photo(product.title) {
                                img src=(photo) alt=(product.title);
                            }
                            h3 { (product.title) }
                            p { (product.desc) }
                            (checks(&product.points))
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn compliance() -> Markup {
    html! {
        section class="page" {
            (page_header(
                "Compliance & Safety",
                "Full Regulatory Compliance",
                "We operate in complete accordance with UK waste management legislation, providing comprehensive documentation and full traceability for every collection.",
            ))
            (feature_grid(2, &CERTIFICATIONS))
            div class="panel" {
                h2 { "What We Provide" }
                div class="provide" {
                    @for item in &PROVISIONS {
                        div class="provide-item" {
                            h4 { (item.title) }
                            p { (item.desc) }
                        }
                    }
                }
            }
        }
    }
}
