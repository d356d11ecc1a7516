/// One rentable unit. The whole catalog is compiled in.
#[derive(Debug, PartialEq, Eq)]
pub struct Property {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub images: &'static [&'static str],
}

impl Property {
    pub fn cover(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }
}

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?q=80&w=1600&auto=format&fit=crop";

pub static PROPERTIES: &[Property] = &[
    Property {
        slug: "a",
        title: "Struttura A",
        summary: "XXX descrizione della Struttura A.",
        details: "XXXXX descrizione estesa della struttura. Servizi, capienza (X persone), posizione (XXX), punti di forza, ecc.",
        images: &[
            "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1561948955-570b270e7c36?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1518020382113-a7e8fc38eac9?q=80&w=1600&auto=format&fit=crop",
        ],
    },
    Property {
        slug: "b",
        title: "Struttura B",
        summary: "XXX descrizione della Struttura B.",
        details: "XXXXX descrizione estesa della struttura. Servizi, capienza (X persone), posizione (XXX), punti di forza, ecc.",
        images: &[
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1543852786-1cf6624b9987?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1558944351-c36d3a4d1985?q=80&w=1600&auto=format&fit=crop",
        ],
    },
    Property {
        slug: "c",
        title: "Struttura C",
        summary: "XXX descrizione della Struttura C.",
        details: "XXXXX descrizione estesa della struttura. Servizi, capienza (X persone), posizione (XXX), punti di forza, ecc.",
        images: &[
            "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1519058497183-06b6111b5b16?q=80&w=1600&auto=format&fit=crop",
        ],
    },
    Property {
        slug: "d",
        title: "Struttura D",
        summary: "XXX descrizione della Struttura D.",
        details: "XXXXX descrizione estesa della struttura. Servizi, capienza (X persone), posizione (XXX), punti di forza, ecc.",
        images: &[
            "https://images.unsplash.com/photo-1494253109108-2e30c049369b?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1508672019048-805c876b67e2?q=80&w=1600&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1450778869180-41d0601e046e?q=80&w=1600&auto=format&fit=crop",
        ],
    },
];

pub static GALLERY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1561948955-570b270e7c36?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1518020382113-a7e8fc38eac9?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1574158622682-e40e69881006?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1543852786-1cf6624b9987?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1558944351-c36d3a4d1985?q=80&w=1400&auto=format&fit=crop",
];

/// Case-sensitive slug lookup; `None` is the "not found" page.
pub fn find(slug: &str) -> Option<&'static Property> {
    PROPERTIES.iter().find(|p| p.slug == slug)
}

pub fn get(index: usize) -> Option<&'static Property> {
    PROPERTIES.get(index)
}
