//! Demo data for development stores.

use crate::domain::{
    BrandColor, BrandInputs, BrandOutput, BrandValue, ColorRole, DesignStyle, LogoSet,
    NewBrandConcept, NewProject, NewUser, Typography,
};
use crate::ports::{CoreError, Repos};

use super::UserService;

pub const DEMO_USERNAME: &str = "testuser";
pub const DEMO_PASSWORD: &str = "password123";

const PRIMARY_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><circle cx="100" cy="100" r="80" fill="#2563EB"/><circle cx="100" cy="100" r="40" fill="#F97316"/><path d="M100 20 L160 100 L100 180 L40 100 Z" fill="none" stroke="#10B981" stroke-width="4"/></svg>"##;
const MONOCHROME_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><circle cx="100" cy="100" r="80" fill="#000000"/><circle cx="100" cy="100" r="40" fill="#FFFFFF"/><path d="M100 20 L160 100 L100 180 L40 100 Z" fill="none" stroke="#888888" stroke-width="4"/></svg>"##;
const REVERSE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><circle cx="100" cy="100" r="80" fill="#FFFFFF"/><circle cx="100" cy="100" r="40" fill="#000000"/><path d="M100 20 L160 100 L100 180 L40 100 Z" fill="none" stroke="#CCCCCC" stroke-width="4"/></svg>"##;

fn color(name: &str, hex: &str, role: ColorRole) -> BrandColor {
    BrandColor {
        name: name.to_string(),
        hex: hex.to_string(),
        role,
    }
}

pub fn sample_inputs() -> BrandInputs {
    BrandInputs {
        brand_name: "Solystra".to_string(),
        industry: "Renewable Energy".to_string(),
        description: "Solar energy solutions for modern homes".to_string(),
        values: ["Sustainability", "Innovation", "Reliability"]
            .iter()
            .enumerate()
            .map(|(i, v)| BrandValue {
                id: (i + 1).to_string(),
                value: (*v).to_string(),
            })
            .collect(),
        design_style: DesignStyle::Modern,
        color_preferences: vec!["blue".to_string(), "green".to_string(), "orange".to_string()],
    }
}

pub fn sample_output() -> BrandOutput {
    BrandOutput {
        logo: LogoSet {
            primary: PRIMARY_SVG.to_string(),
            monochrome: MONOCHROME_SVG.to_string(),
            reverse: REVERSE_SVG.to_string(),
        },
        colors: vec![
            color("Solar Blue", "#2563EB", ColorRole::Primary),
            color("Energy Orange", "#F97316", ColorRole::Secondary),
            color("Eco Green", "#10B981", ColorRole::Accent),
            color("Cloud White", "#F8FAFC", ColorRole::Base),
            color("Night Blue", "#1E3A8A", ColorRole::Base),
        ],
        typography: Typography {
            headings: "Montserrat".to_string(),
            body: "Open Sans".to_string(),
        },
        logo_description: Some(
            "A modern, abstract representation of the sun (orange circle) with solar rays \
             (blue circle) and a diamond shape representing homes and buildings (green outline)."
                .to_string(),
        ),
        tagline: Some("Powering Tomorrow, Today".to_string()),
        contact_name: None,
        contact_title: None,
        contact_phone: None,
        address: None,
        mockups: Vec::new(),
    }
}

/// Populate an empty store with the demo user, project and active concept.
///
/// Returns `false` without touching anything when users already exist.
pub async fn seed_demo_data(repos: &Repos) -> Result<bool, CoreError> {
    let users = UserService::new(repos.users.clone());
    if users.count().await? > 0 {
        return Ok(false);
    }

    let user = users
        .register(NewUser {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
            auth_id: None,
        })
        .await?;

    let project = repos
        .projects
        .insert(&NewProject {
            name: "Solystra".to_string(),
            client_name: Some("Sample Client".to_string()),
            user_id: user.id,
        })
        .await?;

    repos
        .concepts
        .insert(&NewBrandConcept {
            project_id: project.id,
            name: "Initial Concept".to_string(),
            brand_inputs: sample_inputs(),
            brand_output: sample_output(),
            is_active: true,
        })
        .await?;

    tracing::info!(user_id = user.id, project_id = project.id, "Seeded demo data");
    Ok(true)
}
