use festoon_core::{DecorationReport, Environment, FestoonError, FestoonResult};
use festoon_detect::{classify, extract_title};
use tracing::info;

use crate::banner::production_banner;
use crate::inject;
use crate::stylesheet::environment_stylesheet;

/// A decorated page together with the record of what was applied.
#[derive(Debug)]
pub struct Decorated {
    pub html: String,
    pub report: DecorationReport,
}

/// Classify a rendered documentation page and apply the environment
/// mutations, in order: production banner (first child of the UI root),
/// environment stylesheet (document head), `data-environment` stamp on
/// `<body>`.
///
/// The body stamp doubles as the applied-marker: a page that already
/// carries one is returned unchanged with `already_decorated` set, so
/// running the pass twice never duplicates the banner or the stylesheet.
pub fn decorate(html: &str) -> FestoonResult<Decorated> {
    if let Some(existing) = inject::body_attribute(html) {
        let environment = existing
            .parse::<Environment>()
            .unwrap_or(Environment::Default);
        info!(%environment, "page already decorated, skipping");
        return Ok(Decorated {
            html: html.to_string(),
            report: DecorationReport {
                environment,
                color: environment.color().to_string(),
                banner_inserted: false,
                stylesheet_inserted: false,
                body_attr_set: false,
                already_decorated: true,
            },
        });
    }

    let title = extract_title(html)
        .ok_or_else(|| FestoonError::Document("no info title element in document".into()))?;
    let environment = classify(&title);
    let color = environment.color();

    let mut page = html.to_string();
    let mut banner_inserted = false;
    if environment == Environment::Production {
        page = inject::insert_banner(&page, &production_banner()).ok_or_else(|| {
            FestoonError::Document("no swagger-ui root container for banner".into())
        })?;
        banner_inserted = true;
    }

    page = inject::append_stylesheet(&page, &environment_stylesheet(color));
    page = inject::set_body_attribute(&page, environment.as_str())
        .ok_or_else(|| FestoonError::Document("no body element in document".into()))?;

    info!(%environment, color, title = %title, "environment resolved");

    Ok(Decorated {
        html: page,
        report: DecorationReport {
            environment,
            color: color.to_string(),
            banner_inserted,
            stylesheet_inserted: true,
            body_attr_set: true,
            already_decorated: false,
        },
    })
}
