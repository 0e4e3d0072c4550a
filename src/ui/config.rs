use crate::images::ImageBox;

/// Text and layout knobs for the roster screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub placeholder: String,
	pub initial_query: String,
	pub empty_label: String,
	pub loading_label: String,
	pub image_box: ImageBox,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Harry Potter".to_string(),
			placeholder: "Search...".to_string(),
			initial_query: String::new(),
			empty_label: "No results".to_string(),
			loading_label: "Loading characters".to_string(),
			image_box: ImageBox::default(),
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_image_box(mut self, image_box: ImageBox) -> Self {
		self.image_box = image_box;
		self
	}
}
