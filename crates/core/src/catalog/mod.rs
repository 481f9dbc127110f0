use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CarouselError, Result};

/// A single quote shown on a carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub testimonial: String,
    pub name: String,
    pub designation: String,
    pub company: String,
    /// Image handle, usually a path relative to the asset directory.
    pub image: String,
}

impl Testimonial {
    pub fn new(
        testimonial: impl Into<String>,
        name: impl Into<String>,
        designation: impl Into<String>,
        company: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            testimonial: testimonial.into(),
            name: name.into(),
            designation: designation.into(),
            company: company.into(),
            image: image.into(),
        }
    }

    pub fn handle(&self) -> String {
        format!("@ {}", self.name)
    }

    pub fn affiliation(&self) -> String {
        format!("{} at {}", self.designation, self.company)
    }

    pub fn alt_text(&self) -> String {
        format!("feedback-by-{}", self.name)
    }
}

/// Ordered, non-empty and immutable list of testimonials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialCatalog {
    items: Vec<Testimonial>,
}

impl TestimonialCatalog {
    pub fn new(items: Vec<Testimonial>) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCatalog);
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of testimonial records.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let items: Vec<Testimonial> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(?path, items = catalog.len(), "loaded testimonial catalog");
        Ok(catalog)
    }

    /// Testimonials shipped with the portfolio page.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                Testimonial::new(
                    "Avishek is one of the most dedicated and skilled individuals I’ve met in our CSE batch. As his classmate, I’ve seen how passionate he is about artificial intelligence, machine learning, and Python development. He’s always eager to learn, solve problems, and help others when needed. Even without working directly with him, it’s clear that he stands out for his consistent effort and strong technical abilities. I’m confident he’ll do great things in the future!",
                    "Nahida Akter Jenifa",
                    "Full-Stack Web Developer",
                    "CrevoSys",
                    "assets/jenifa.jpg",
                ),
                Testimonial::new(
                    "Avishek is one of the most hardworking and sincere people I know. He takes his responsibilities seriously and always puts in genuine effort, no matter how big or small the task is. What stands out most is his dedication,he doesn't give up easily and is always willing to learn and improve. He's not just reliable, but also someone who brings a positive energy to any team or environment. I truly believe he'll do well in whatever he sets his mind to.",
                    "Farhana Maisha Chowdhury",
                    "CSE Undergraduate",
                    "Metropolitan University",
                    "assets/maisha.jpg",
                ),
                Testimonial::new(
                    "During my time working with Avishek, I’ve come to truly admire his talent and dedication. Despite being my batchmate and of the same age, he stands out with his skills in artificial intelligence, machine learning and Python development. He consistently delivers high-quality work. It’s been a great experience collaborating with him, especially during the Hult Prize journey.",
                    "Chaity Upadhyay",
                    "CSE Undergraduate",
                    "Metropolitan University",
                    "assets/chaity.jpg",
                ),
                Testimonial::new(
                    "From my experience, I found Avishek—a very hardworking, motivated, and reliable person. His efforts reflect his commitment to his goals and growth mindset. I believe his good communication skills, hardworking mentality, and reliable personality will be a great asset for any company.",
                    "Sadia Sultana",
                    "CSE Undergraduate",
                    "Metropolitan University",
                    "assets/bfemale.png",
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a constructed catalog; `new` rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Testimonial> {
        self.items.iter()
    }
}
