//! Registration form layout
//!
//! Places a [`RegistrationRecord`] on A4 pages: centred heading, a rule,
//! label/value rows, the bulleted course list and the fill-in date. Long
//! course lists continue on further pages; the footer repeats on each.

use enrol_record::RegistrationRecord;
use serde::{Deserialize, Serialize};

use crate::composer::{Footer, LayoutComposer};
use crate::layout::{Align, Document, DocumentMetadata, Font, PageSize, Rgb};

const TITLE_COLOR: Rgb = Rgb(25, 25, 112);
const SUBTITLE_COLOR: Rgb = Rgb(70, 70, 70);
const RULE_COLOR: Rgb = Rgb(56, 189, 248);
const FOOTER_COLOR: Rgb = Rgb(100, 100, 100);

const LEFT: f64 = 20.0;
const VALUE_X: f64 = 80.0;
const BULLET_X: f64 = 25.0;
const LINE_HEIGHT: f64 = 10.0;
const BODY_START: f64 = 100.0;

/// Branding and date for a registration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOptions {
    /// Heading
    pub title: String,
    /// Line under the heading
    pub subtitle: String,
    /// Footer on every page
    pub footer: String,
    /// Short academy name used in field labels
    pub academy_name: String,
    /// Pre-formatted fill-in date
    pub filled_on: String,
}

impl DocumentOptions {
    /// With fill-in date
    #[must_use]
    pub fn with_filled_on(mut self, date: impl Into<String>) -> Self {
        self.filled_on = date.into();
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "TECH_STAR ACADEMY".to_string(),
            subtitle: "Formulário de Inscrição".to_string(),
            footer: "TECH_STAR ACADEMY - TECHNOLLOGY".to_string(),
            academy_name: "TECH_STAR".to_string(),
            filled_on: String::new(),
        }
    }
}

/// Lay out a registration record
#[must_use]
pub fn registration_document(record: &RegistrationRecord, options: &DocumentOptions) -> Document {
    let size = PageSize::A4;
    let mut composer = LayoutComposer::new(size).with_footer(Footer {
        text: options.footer.clone(),
        size: 10.0,
        color: FOOTER_COLOR,
        offset: 10.0,
    });

    // heading; y 10..60 is left for the logo
    composer
        .set_font_size(22.0)
        .set_text_color(TITLE_COLOR)
        .text_at(size.center_x(), 75.0, options.title.as_str(), Align::Center)
        .set_font_size(16.0)
        .set_text_color(SUBTITLE_COLOR)
        .text_at(size.center_x(), 85.0, options.subtitle.as_str(), Align::Center)
        .line((LEFT, 90.0), (size.width - LEFT, 90.0), 0.5, RULE_COLOR);

    composer
        .set_font_size(12.0)
        .set_text_color(Rgb::BLACK)
        .move_to(BODY_START);

    let age = record.age.to_string();
    let referral_label = format!("Como soube da {}:", options.academy_name);
    let mut rows: Vec<(&str, &str)> = vec![
        ("Nome completo:", record.full_name.as_str()),
        ("Idade:", age.as_str()),
        ("WhatsApp:", record.whatsapp.as_str()),
    ];
    if record.has_email() {
        rows.push(("Email:", record.email.as_str()));
    }
    rows.extend([
        ("Escolaridade:", record.education.as_str()),
        ("Nível de conhecimento:", record.knowledge_level.as_str()),
        (referral_label.as_str(), record.referral_source.as_str()),
    ]);

    for (label, value) in rows {
        composer
            .write_pair(LEFT, label, VALUE_X, value)
            .advance(LINE_HEIGHT);
    }
    composer.advance(LINE_HEIGHT / 2.0);

    composer
        .set_font(Font::Bold)
        .write(LEFT, "Cursos de interesse:")
        .advance(LINE_HEIGHT)
        .set_font(Font::Regular);
    for course in &record.courses_of_interest {
        composer
            .write(BULLET_X, format!("• {course}"))
            .advance(LINE_HEIGHT);
    }

    composer
        .advance(LINE_HEIGHT)
        .set_font(Font::Italic)
        .set_font_size(10.0)
        .write(LEFT, format!("Formulário preenchido em: {}", options.filled_on));

    let page_count = composer.page_index() + 1;
    tracing::debug!(pages = page_count, courses = record.courses_of_interest.len(), "registration laid out");

    composer.finish(DocumentMetadata {
        title: format!("{} - {}", options.subtitle, record.full_name),
        author: options.title.clone(),
        subject: options.subtitle.clone(),
    })
}
