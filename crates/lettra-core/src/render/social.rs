//! `mj-social` and `mj-social-element` rendering.

use super::{Frame, Renderer};
use crate::ast::Element;
use crate::error::Error;
use crate::helper::condition::conditional_tag;
use crate::helper::size::format_value;
use crate::helper::tag::Tag;

const ICON_ORIGIN: &str = "https://www.mailjet.com/images/theme/v1/icons/ico-social/";

/// Presentation attributes forwarded from the container to each element,
/// keyed container attribute → element attribute.
const FORWARDED: &[(&str, &str)] = &[
	("inner-padding", "padding"),
	("border-radius", "border-radius"),
	("color", "color"),
	("font-family", "font-family"),
	("font-size", "font-size"),
	("font-weight", "font-weight"),
	("font-style", "font-style"),
	("icon-size", "icon-size"),
	("icon-height", "icon-height"),
	("icon-padding", "icon-padding"),
	("text-padding", "text-padding"),
	("line-height", "line-height"),
	("text-decoration", "text-decoration"),
];

/// Built-in network branding: icon, badge color and an optional share URL
/// template. A `-noshare` suffix keeps the branding but drops the share
/// redirection.
struct SocialNetwork {
	background_color: &'static str,
	share_url: Option<&'static str>,
	icon: &'static str,
}

impl SocialNetwork {
	fn find(name: &str) -> Option<Self> {
		let (name, noshare) = match name.strip_suffix("-noshare") {
			Some(label) => (label, true),
			None => (name, false),
		};
		let network = match name {
			"dribbble" => Self {
				background_color: "#D95988",
				share_url: None,
				icon: "dribbble.png",
			},
			"facebook" => Self {
				background_color: "#3b5998",
				share_url: Some("https://www.facebook.com/sharer/sharer.php?u=[[URL]]"),
				icon: "facebook.png",
			},
			"github" => Self {
				background_color: "#000000",
				share_url: None,
				icon: "github.png",
			},
			"google" => Self {
				background_color: "#dc4e41",
				share_url: Some("https://plus.google.com/share?url=[[URL]]"),
				icon: "google-plus.png",
			},
			"instagram" => Self {
				background_color: "#3f729b",
				share_url: None,
				icon: "instagram.png",
			},
			"linkedin" => Self {
				background_color: "#0077b5",
				share_url: Some(
					"https://www.linkedin.com/shareArticle?mini=true&url=[[URL]]&title=&summary=&source=",
				),
				icon: "linkedin.png",
			},
			"medium" => Self {
				background_color: "#000000",
				share_url: None,
				icon: "medium.png",
			},
			"pinterest" => Self {
				background_color: "#bd081c",
				share_url: Some(
					"https://pinterest.com/pin/create/button/?url=[[URL]]&media=&description=",
				),
				icon: "pinterest.png",
			},
			"snapchat" => Self {
				background_color: "#FFFA54",
				share_url: None,
				icon: "snapchat.png",
			},
			"soundcloud" => Self {
				background_color: "#EF7F31",
				share_url: None,
				icon: "soundcloud.png",
			},
			"tumblr" => Self {
				background_color: "#344356",
				share_url: Some("https://www.tumblr.com/widgets/share/tool?canonicalUrl=[[URL]]"),
				icon: "tumblr.png",
			},
			"twitter" => Self {
				background_color: "#55acee",
				share_url: Some("https://twitter.com/home?status=[[URL]]"),
				icon: "twitter.png",
			},
			"vimeo" => Self {
				background_color: "#53B4E7",
				share_url: None,
				icon: "vimeo.png",
			},
			"web" => Self {
				background_color: "#4BADE9",
				share_url: None,
				icon: "web.png",
			},
			"xing" => Self {
				background_color: "#296366",
				share_url: Some("https://www.xing.com/app/user?op=share&url=[[URL]]"),
				icon: "xing.png",
			},
			"youtube" => Self {
				background_color: "#EB3323",
				share_url: None,
				icon: "youtube.png",
			},
			_ => return None,
		};
		Some(if noshare {
			Self {
				share_url: None,
				..network
			}
		} else {
			network
		})
	}

	fn share_url(&self, url: &str) -> Option<String> {
		self.share_url
			.map(|template| template.replace("[[URL]]", url))
	}

	fn icon_src(&self) -> String {
		format!("{ICON_ORIGIN}{}", self.icon)
	}
}

impl Renderer<'_> {
	pub(super) fn render_social(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		if frame.attribute("mode") == Some("vertical") {
			self.render_social_vertical(frame)
		} else {
			self.render_social_horizontal(frame)
		}
	}

	/// Cascades the container's shared presentation attributes onto an
	/// element, below anything the element sets itself.
	fn social_child_frame<'e>(&self, parent: &Frame<'_>, element: &'e Element) -> Frame<'e> {
		let mut child = self.frame(element);
		child.container_width = parent.container_width.clone();
		for (container_key, child_key) in FORWARDED {
			if element.attributes.contains_key(*child_key) {
				continue;
			}
			if let Some(value) = parent.attribute(container_key) {
				child
					.attributes
					.insert((*child_key).to_string(), value.to_owned());
			}
		}
		child
	}

	fn render_social_horizontal(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let table = Tag::table_presentation()
			.maybe_add_attribute("align", frame.attribute_string("align"));
		let inner_table = Tag::table_presentation()
			.maybe_add_attribute("align", frame.attribute_string("align"))
			.add_style("float", "none")
			.add_style("display", "inline-table");
		let cell = Tag::td();
		let mut out = String::new();
		out.push_str(&conditional_tag(format!("{}<tr>", table.open())));
		for child in frame.element.children.iter() {
			match child.as_element() {
				Some(element) => {
					let child_frame = self.social_child_frame(frame, element);
					let rendered = self.render_element(&child_frame)?;
					out.push_str(&conditional_tag(cell.open()));
					out.push_str(&inner_table.render(Tag::tbody().render(rendered)));
					out.push_str(&conditional_tag(cell.close()));
				}
				None => {
					out.push_str(&self.render_node(child, frame.container_width.clone(), 1, 0)?);
				}
			}
		}
		out.push_str(&conditional_tag(format!("</tr>{}", table.close())));
		Ok(out)
	}

	fn render_social_vertical(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		let mut content = String::new();
		for child in frame.element.children.iter() {
			match child.as_element() {
				Some(element) => {
					let child_frame = self.social_child_frame(frame, element);
					content.push_str(&self.render_element(&child_frame)?);
				}
				None => {
					content
						.push_str(&self.render_node(child, frame.container_width.clone(), 1, 0)?);
				}
			}
		}
		let table = Tag::table_presentation().add_style("margin", "0px");
		Ok(table.render(Tag::tbody().render(content)))
	}

	pub(super) fn render_social_element(&mut self, frame: &Frame<'_>) -> Result<String, Error> {
		if let Some(family) = frame.attribute_string("font-family") {
			self.add_used_font_family(&family);
		}
		let network = frame.attribute("name").and_then(SocialNetwork::find);
		let href = frame.attribute("href").map(|href| {
			network
				.as_ref()
				.and_then(|net| net.share_url(href))
				.unwrap_or_else(|| href.to_owned())
		});
		let icon_size = frame.attribute_size("icon-size");
		let icon_height = frame
			.attribute_size("icon-height")
			.or_else(|| icon_size.clone());
		let background = frame
			.attribute_string("background-color")
			.or_else(|| network.as_ref().map(|net| net.background_color.to_owned()));
		let src = frame
			.attribute_string("src")
			.or_else(|| network.as_ref().map(SocialNetwork::icon_src));

		let icon_table = Tag::table_presentation()
			.maybe_add_style("background", background)
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
			.maybe_add_style("width", icon_size.as_ref().map(ToString::to_string));
		let icon_cell = Tag::td()
			.maybe_add_style("padding", frame.attribute_string("icon-padding"))
			.add_style("font-size", "0")
			.maybe_add_style("height", icon_height.as_ref().map(ToString::to_string))
			.add_style("vertical-align", "middle")
			.maybe_add_style("width", icon_size.as_ref().map(ToString::to_string));
		let img = Tag::new("img")
			.maybe_add_attribute("alt", frame.attribute_string("alt"))
			.maybe_add_attribute("title", frame.attribute_string("title"))
			.maybe_add_attribute(
				"height",
				icon_height.as_ref().map(|size| format_value(size.value())),
			)
			.maybe_add_attribute("src", src)
			.maybe_add_attribute(
				"width",
				icon_size.as_ref().map(|size| format_value(size.value())),
			)
			.maybe_add_style("border-radius", frame.attribute_string("border-radius"))
			.add_style("display", "block");
		let icon = match href.as_ref() {
			Some(href) => Tag::new("a")
				.add_attribute("href", href.clone())
				.maybe_add_attribute("rel", frame.attribute_string("rel"))
				.maybe_add_attribute("target", frame.attribute_string("target"))
				.render(img.closed()),
			None => img.closed(),
		};
		let icon = icon_table.render(Tag::tbody().render(Tag::tr().render(icon_cell.render(icon))));

		let cell = Tag::td()
			.maybe_add_style("padding", frame.attribute_string("padding"))
			.maybe_add_style("padding-top", frame.attribute_string("padding-top"))
			.maybe_add_style("padding-right", frame.attribute_string("padding-right"))
			.maybe_add_style("padding-bottom", frame.attribute_string("padding-bottom"))
			.maybe_add_style("padding-left", frame.attribute_string("padding-left"))
			.maybe_add_style("vertical-align", frame.attribute_string("vertical-align"));
		let row = Tag::tr().maybe_add_class(frame.attribute_string("css-class"));

		let mut out = String::new();
		out.push_str(&row.open());
		out.push_str(&cell.render(icon));
		if !frame.element.children.is_empty() {
			out.push_str(&self.render_social_text(frame, href.as_deref())?);
		}
		out.push_str(&row.close());
		Ok(out)
	}

	fn render_social_text(&mut self, frame: &Frame<'_>, href: Option<&str>) -> Result<String, Error> {
		let content = self.render_mixed_children(frame)?;
		let wrapper = match href {
			Some(href) => Tag::new("a")
				.add_attribute("href", href.to_owned())
				.maybe_add_attribute("rel", frame.attribute_string("rel"))
				.maybe_add_attribute("target", frame.attribute_string("target")),
			None => Tag::new("span"),
		};
		let wrapper = wrapper
			.maybe_add_style("color", frame.attribute_string("color"))
			.maybe_add_style("font-size", frame.attribute_string("font-size"))
			.maybe_add_style("font-weight", frame.attribute_string("font-weight"))
			.maybe_add_style("font-style", frame.attribute_string("font-style"))
			.maybe_add_style("font-family", frame.attribute_string("font-family"))
			.maybe_add_style("line-height", frame.attribute_string("line-height"))
			.maybe_add_style("text-decoration", frame.attribute_string("text-decoration"));
		let cell = Tag::td()
			.add_style("vertical-align", "middle")
			.maybe_add_style("padding", frame.attribute_string("text-padding"));
		Ok(cell.render(wrapper.render(content)))
	}
}
