use crate::domain::Field;

// One row of the dashboard. Every field is a non-empty string and is never
// written back after loading; the date stays in whatever format the source
// delivered it in and is not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub image: String,
    pub client: String,
    pub country: String,
    pub email: String,
    pub project: String,
    pub status: String,
    pub date: String,
}

impl ProjectRecord {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::CLIENT => &self.client,
            Field::COUNTRY => &self.country,
            Field::EMAIL => &self.email,
            Field::PROJECT => &self.project,
            Field::STATUS => &self.status,
            Field::DATE => &self.date,
        }
    }

    // All field values, image included. Free text search runs over these.
    pub fn values(&self) -> [&str; 7] {
        [
            &self.image,
            &self.client,
            &self.country,
            &self.email,
            &self.project,
            &self.status,
            &self.date,
        ]
    }
}

fn record(
    image: &str,
    client: &str,
    country: &str,
    email: &str,
    project: &str,
    status: &str,
    date: &str,
) -> ProjectRecord {
    ProjectRecord {
        image: image.to_string(),
        client: client.to_string(),
        country: country.to_string(),
        email: email.to_string(),
        project: project.to_string(),
        status: status.to_string(),
        date: date.to_string(),
    }
}

// The one read the dashboard performs. Stands in for whatever backend would
// feed it; the order below is the unsorted base order of the table.
pub fn seed() -> Vec<ProjectRecord> {
    vec![
        record(
            "https://randomuser.me/api/portraits/men/75.jpg",
            "Beerus",
            "United States",
            "beerus@dashmail.com",
            "Website Redesign",
            "Complete",
            "08/01/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/76.jpg",
            "Whis",
            "France",
            "whis@dashmail.com",
            "Landing Page",
            "Pending",
            "09/12/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/77.jpg",
            "Goku",
            "Japan",
            "goku@dashmail.com",
            "Mobile App",
            "In Progress",
            "10/03/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/78.jpg",
            "Vegeta",
            "Japan",
            "vegeta@dashmail.com",
            "CRM Migration",
            "Complete",
            "07/21/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/79.jpg",
            "Alfred",
            "United Kingdom",
            "alfred@dashmail.com",
            "E-commerce Site",
            "Pending",
            "11/05/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/80.jpg",
            "Champa",
            "United States",
            "champa@dashmail.com",
            "Analytics Dashboard",
            "In Progress",
            "08/17/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/81.jpg",
            "Zeno",
            "Germany",
            "zeno@dashmail.com",
            "Brand Refresh",
            "Complete",
            "06/30/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/women/75.jpg",
            "Bulma",
            "Brazil",
            "bulma@dashmail.com",
            "Capsule Catalog",
            "In Progress",
            "09/28/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/82.jpg",
            "Piccolo",
            "India",
            "piccolo@dashmail.com",
            "API Gateway",
            "Pending",
            "10/14/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/83.jpg",
            "Gohan",
            "Canada",
            "gohan@dashmail.com",
            "Docs Portal",
            "Complete",
            "07/02/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/84.jpg",
            "Trunks",
            "Mexico",
            "trunks@dashmail.com",
            "Billing Service",
            "In Progress",
            "11/19/2024",
        ),
        record(
            "https://randomuser.me/api/portraits/men/85.jpg",
            "Krillin",
            "Australia",
            "krillin@dashmail.com",
            "Support Center",
            "Pending",
            "08/23/2024",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fields_are_nonempty() {
        let projects = seed();
        assert!(!projects.is_empty());
        for p in projects {
            for value in p.values() {
                assert!(!value.is_empty());
            }
        }
    }
}
