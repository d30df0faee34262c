use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseStudy {
    pub challenge: String,
    pub solution: String,
    pub results: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    /// First entry of `tech`, lowercased; empty when the project lists none.
    pub fn primary_tech(&self) -> String {
        self.tech.first().map(|t| t.to_lowercase()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Website {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub name: String,
    pub logo: String,
    pub url: String,
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: "ecommerce-dashboard".into(),
            title: "E-commerce Dashboard".into(),
            description: "Admin dashboard for orders, inventory and sales analytics.".into(),
            tech: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
            tags: vec!["dashboard".into(), "analytics".into()],
            live: "https://example.com/dashboard".into(),
            repo: "https://github.com/example/dashboard".into(),
            images: vec!["images/dashboard.png".into()],
            role: "Full-stack developer".into(),
            case_study: Some(CaseStudy {
                challenge: "Store owners had no single view of stock and sales.".into(),
                solution: "Built a React front end over a Node.js reporting API.".into(),
                results: "Order handling time dropped by a third.".into(),
            }),
        },
        Project {
            id: "shopify-theme".into(),
            title: "Custom Shopify Theme".into(),
            description: "Responsive storefront theme with a custom product builder.".into(),
            tech: vec!["Shopify".into(), "JavaScript".into(), "CSS".into()],
            tags: vec!["ecommerce".into(), "theme".into()],
            live: "https://example.com/store".into(),
            repo: "https://github.com/example/shopify-theme".into(),
            images: vec!["images/store.png".into()],
            role: "Front-end developer".into(),
            case_study: None,
        },
    ]
}

pub fn fallback_websites() -> Vec<Website> {
    vec![
        Website {
            id: "bakery".into(),
            title: "Neighbourhood Bakery".into(),
            url: "https://example.com/bakery".into(),
            image: "images/bakery.png".into(),
            tech: vec!["WordPress".into(), "CSS".into()],
        },
        Website {
            id: "studio".into(),
            title: "Design Studio".into(),
            url: "https://example.com/studio".into(),
            image: "images/studio.png".into(),
            tech: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            text: "Delivered ahead of schedule and communicated clearly throughout.".into(),
            author: "Amina K.".into(),
            company: Some("Bloom Bakery".into()),
        },
        Testimonial {
            text: "Our new storefront doubled mobile conversions.".into(),
            author: "Daniel R.".into(),
            company: Some("North Supply".into()),
        },
        Testimonial {
            text: "Patient, thorough and great at explaining trade-offs.".into(),
            author: "Lena M.".into(),
            company: None,
        },
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            name: "Bloom Bakery".into(),
            logo: "images/clients/bloom.svg".into(),
            url: "https://example.com/bloom".into(),
        },
        Client {
            name: "North Supply".into(),
            logo: "images/clients/north.svg".into(),
            url: "https://example.com/north".into(),
        },
        Client {
            name: "Studio Nine".into(),
            logo: "images/clients/nine.svg".into(),
            url: "https://example.com/nine".into(),
        },
    ]
}
