/// An element selector split into tag, id and classes.
///
/// The id starts at the first `#`, the classes at the first `.` after it.
/// Delimiters at the very start don't count, so `"#a"` is a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector<'a> {
	pub tag: &'a str,
	pub id: Option<&'a str>,
	/// Space-separated.
	pub class: Option<String>,
}

impl<'a> Selector<'a> {
	#[must_use]
	pub fn parse(sel: &'a str) -> Self {
		let hash_idx = sel.find('#');
		let dot_idx = sel[hash_idx.unwrap_or(0)..].find('.').map(|i| i + hash_idx.unwrap_or(0));

		let hash = hash_idx.filter(|&i| i > 0).unwrap_or_else(|| sel.len());
		let dot = dot_idx.filter(|&i| i > 0).unwrap_or_else(|| sel.len());

		let tag = if hash_idx.is_some() || dot_idx.is_some() { &sel[..hash.min(dot)] } else { sel };
		let id = if hash < dot { Some(&sel[hash + 1..dot]) } else { None };
		let class = dot_idx.filter(|&i| i > 0).map(|_| sel[dot + 1..].replace('.', " "));

		Self { tag, id, class }
	}
}
