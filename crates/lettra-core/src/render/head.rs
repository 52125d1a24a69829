//! `<head>` assembly: compatibility boilerplate, fonts, media queries
//! and collected styles.

use super::Renderer;
use crate::helper::condition::mso_negation_conditional_tag;

const STYLE_BASE: &str = r#"<style type="text/css">#outlook a { padding: 0; }
body { margin: 0; padding: 0; -webkit-text-size-adjust: 100%; -ms-text-size-adjust: 100%; }
table, td { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; }
img { border: 0; height: auto; line-height: 100%; outline: none; text-decoration: none; -ms-interpolation-mode: bicubic; }
p { display: block; margin: 13px 0; }</style>
<!--[if mso]><noscript><xml><o:OfficeDocumentSettings><o:AllowPNG/><o:PixelsPerInch>96</o:PixelsPerInch></o:OfficeDocumentSettings></xml></noscript><![endif]-->
<!--[if lte mso 11]><style type="text/css">.mj-outlook-group-fix { width:100% !important; }</style><![endif]-->"#;

impl Renderer<'_> {
	pub(super) fn render_head(&self) -> String {
		let mut out = String::from("<head>");
		out.push_str("<title>");
		out.push_str(self.title.as_deref().unwrap_or(""));
		out.push_str("</title>");
		out.push_str("<!--[if !mso]><!-->");
		out.push_str("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">");
		out.push_str("<!--<![endif]-->");
		out.push_str("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">");
		out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
		out.push_str(STYLE_BASE);
		out.push_str(&self.render_font_families());
		out.push_str(&self.render_media_queries());
		out.push_str(&self.render_styles());
		out.push_str("</head>");
		out
	}

	/// Emits one `<link>` plus one `@import` per used family that has a
	/// known stylesheet. Outlook ignores both thanks to the negation
	/// conditional.
	fn render_font_families(&self) -> String {
		let hrefs: Vec<&str> = self
			.used_font_families
			.iter()
			.filter_map(|family| self.fonts.get(family))
			.map(|href| href.as_ref())
			.collect();
		if hrefs.is_empty() {
			return String::new();
		}
		let mut inner = String::new();
		for href in hrefs.iter() {
			inner.push_str("<link href=\"");
			inner.push_str(href);
			inner.push_str("\" rel=\"stylesheet\" type=\"text/css\">");
		}
		inner.push_str("<style type=\"text/css\">");
		for href in hrefs.iter() {
			inner.push_str("@import url(");
			inner.push_str(href);
			inner.push_str(");");
		}
		inner.push_str("</style>");
		mso_negation_conditional_tag(inner)
	}

	/// One rule per responsive class, sorted by class name so output does
	/// not depend on document order, duplicated for Thunderbird under its
	/// `.moz-text-html` scope.
	fn render_media_queries(&self) -> String {
		if self.media_queries.is_empty() {
			return String::new();
		}
		let mut entries: Vec<_> = self.media_queries.iter().collect();
		entries.sort_by(|left, right| left.0.cmp(right.0));
		let breakpoint = self.breakpoint.to_string();
		let mut out = format!(
			"<style type=\"text/css\">@media only screen and (min-width:{breakpoint}) {{ "
		);
		for (classname, size) in entries.iter() {
			out.push_str(&format!(
				".{classname} {{ width:{size} !important; max-width:{size}; }} "
			));
		}
		out.push_str("}</style>");
		out.push_str(&format!("<style media=\"screen and (min-width:{breakpoint})\">"));
		for (classname, size) in entries.iter() {
			out.push_str(&format!(
				".moz-text-html .{classname} {{ width:{size} !important; max-width:{size}; }} "
			));
		}
		out.push_str("</style>");
		out
	}

	/// Component-registered styles followed by `mj-style` contents.
	fn render_styles(&self) -> String {
		if self.styles.is_empty() && self.head_styles.is_empty() {
			return String::new();
		}
		let mut out = String::from("<style type=\"text/css\">");
		for style in self.styles.iter() {
			out.push_str(style);
		}
		for style in self.head_styles.iter() {
			out.push_str(style);
		}
		out.push_str("</style>");
		out
	}
}
