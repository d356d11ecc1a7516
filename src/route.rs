use serde::Serialize;

use crate::error::SiteError;

const STRUCTURE_PREFIX: &str = "/strutture/";
const GALLERY_PATH: &str = "/galleria";
const CONTACT_PATH: &str = "/contatti";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum Route {
    Home,
    Gallery,
    Contact,
    Structure { slug: String },
}

impl Route {
    /// Canonical fragment for links and `location.hash`.
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Gallery => format!("#{GALLERY_PATH}"),
            Route::Contact => format!("#{CONTACT_PATH}"),
            Route::Structure { slug } => {
                format!("#{STRUCTURE_PREFIX}{}", urlencoding::encode(slug))
            }
        }
    }

    pub fn structure(slug: &str) -> Self {
        Route::Structure { slug: slug.to_string() }
    }
}

/// Maps a location fragment (with or without the leading `#`) to a page.
/// Total: anything unrecognised is the home page.
pub fn parse_hash(fragment: &str) -> Route {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);

    if let Some(rest) = path.strip_prefix(STRUCTURE_PREFIX) {
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let raw = &rest[..end];
        if !raw.is_empty() {
            // Undecodable bytes: keep the raw segment rather than fail.
            let slug = urlencoding::decode(raw)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            return Route::Structure { slug };
        }
    }

    match path {
        GALLERY_PATH => Route::Gallery,
        CONTACT_PATH => Route::Contact,
        _ => Route::Home,
    }
}

pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    parse_hash(&hash)
}

/// Points the browser at `route`; the hashchange listener does the rest.
pub fn navigate(route: &Route) -> Result<(), SiteError> {
    let w = web_sys::window().ok_or(SiteError::Unavailable("window"))?;
    w.location().set_hash(&route.to_hash())?;
    log::info!("navigate -> {}", route.to_hash());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_slug() {
        assert_eq!(parse_hash("#/strutture/b"), Route::structure("b"));
        assert_eq!(parse_hash("/strutture/b"), Route::structure("b"));
    }

    #[test]
    fn structure_slug_is_percent_decoded() {
        assert_eq!(
            parse_hash("#/strutture/baita%20alta"),
            Route::structure("baita alta")
        );
        assert_eq!(parse_hash("#/strutture/%C3%A8"), Route::structure("è"));
    }

    #[test]
    fn structure_segment_stops_at_separators() {
        assert_eq!(parse_hash("#/strutture/a/extra"), Route::structure("a"));
        assert_eq!(parse_hash("#/strutture/a?x=1"), Route::structure("a"));
        assert_eq!(parse_hash("#/strutture/a#top"), Route::structure("a"));
    }

    #[test]
    fn unknown_slug_still_parses() {
        assert_eq!(parse_hash("#/strutture/zzz"), Route::structure("zzz"));
    }

    #[test]
    fn empty_structure_segment_is_home() {
        assert_eq!(parse_hash("#/strutture/"), Route::Home);
        assert_eq!(parse_hash("#/strutture//a"), Route::Home);
        assert_eq!(parse_hash("#/strutture"), Route::Home);
    }

    #[test]
    fn invalid_utf8_keeps_raw_segment() {
        assert_eq!(parse_hash("#/strutture/%FF"), Route::structure("%FF"));
    }

    #[test]
    fn fixed_pages() {
        assert_eq!(parse_hash("#/galleria"), Route::Gallery);
        assert_eq!(parse_hash("#/contatti"), Route::Contact);
        assert_eq!(parse_hash("/galleria"), Route::Gallery);
    }

    #[test]
    fn fixed_pages_match_exactly() {
        assert_eq!(parse_hash("#/galleria/"), Route::Home);
        assert_eq!(parse_hash("#/Contatti"), Route::Home);
        assert_eq!(parse_hash("#/contatti?x"), Route::Home);
    }

    #[test]
    fn everything_else_is_home() {
        for s in ["", "#", "#/", "/", "#disponibilita", "#/nope", "garbage"] {
            assert_eq!(parse_hash(s), Route::Home, "{s:?}");
        }
    }

    #[test]
    fn hash_rendering_parses_back() {
        let routes = [
            Route::Home,
            Route::Gallery,
            Route::Contact,
            Route::structure("a"),
            Route::structure("casa/nel bosco"),
        ];
        for r in routes {
            assert_eq!(parse_hash(&r.to_hash()), r);
        }
    }

    #[test]
    fn slug_is_encoded_in_hash() {
        assert_eq!(
            Route::structure("casa nel bosco").to_hash(),
            "#/strutture/casa%20nel%20bosco"
        );
    }
}
