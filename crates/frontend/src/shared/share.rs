use urlencoding::encode;

/// One social share target
#[derive(Debug, Clone, PartialEq)]
pub struct ShareLink {
    pub label: &'static str,
    pub href: String,
}

/// Share links for a page, with `url` and `title` URL-encoded
pub fn share_links(url: &str, title: &str) -> Vec<ShareLink> {
    let u = encode(url);
    let t = encode(title);
    vec![
        ShareLink {
            label: "X",
            href: format!("https://twitter.com/intent/tweet?url={}&text={}", u, t),
        },
        ShareLink {
            label: "Facebook",
            href: format!("https://www.facebook.com/sharer/sharer.php?u={}", u),
        },
        ShareLink {
            label: "WhatsApp",
            href: format!("https://wa.me/?text={}%20{}", t, u),
        },
        ShareLink {
            label: "Pinterest",
            href: format!(
                "https://pinterest.com/pin/create/button/?url={}&description={}",
                u, t
            ),
        },
        ShareLink {
            label: "Email",
            href: format!("mailto:?subject={}&body={}", t, u),
        },
    ]
}
