use serde::Deserialize;

/// Which top-level page is showing. Owned by each request, never global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Individual,
    Industrial,
}

impl View {
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("individual") => View::Individual,
            Some("industrial") => View::Industrial,
            _ => View::Landing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Individual => "individual",
            View::Industrial => "industrial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Landing => "Carbon Dashboard",
            View::Individual => "Personal Carbon Tracker",
            View::Industrial => "Industrial Emissions Dashboard",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}

impl ViewQuery {
    pub fn view(&self) -> View {
        View::from_param(self.view.as_deref())
    }
}
