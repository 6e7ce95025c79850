/// HTML attributes in insertion order.
///
/// Order matters for output stability: `img` renders `src` before `alt`
/// because that is the order they are inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as a sequence of ` key='value'` pairs (leading space included).
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.0 {
            out.push(' ');
            out.push_str(k);
            out.push_str("='");
            out.push_str(v);
            out.push('\'');
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn renders_in_insertion_order() {
        let attrs = Attributes::new()
            .with("href", "https://www.google.com")
            .with("target", "_blank");
        assert_eq!(
            attrs.to_html(),
            " href='https://www.google.com' target='_blank'"
        );
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut attrs: Attributes = [("src", "a.png"), ("alt", "a")].into_iter().collect();
        attrs.insert("src", "b.png");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.to_html(), " src='b.png' alt='a'");
    }

    #[test]
    fn values_render_verbatim() {
        let attrs = Attributes::new().with("alt", "Tom & \"Jerry\"");
        assert_eq!(attrs.to_html(), " alt='Tom & \"Jerry\"'");
    }

    #[test]
    fn get_missing_key() {
        assert_eq!(Attributes::new().get("href"), None);
    }
}
