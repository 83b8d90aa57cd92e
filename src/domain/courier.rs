use crate::domain::attributes::{expect_string, expect_string_array, Attributes, Setter};

/// One supported carrier.
///
/// `required_fields` is the server-driven list of extra field names that
/// particular carrier needs when creating a tracking (postal code, ship
/// date, account number and so on). The set is open, so it stays a plain
/// list of strings.
#[derive(Debug, Clone, Default)]
pub struct Courier {
    slug: Option<String>,
    name: Option<String>,
    other_name: Option<String>,
    phone: Option<String>,
    web_url: Option<String>,
    required_fields: Vec<String>,
}

impl Courier {
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn other_name(&self) -> Option<&str> {
        self.other_name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    pub fn required_fields(&self) -> &[String] {
        &self.required_fields
    }
}

impl Attributes for Courier {
    const FIELDS: &'static [(&'static str, Setter<Self>)] = &[
        ("slug", |c, v| {
            c.slug = expect_string("slug", v)?;
            Ok(())
        }),
        ("name", |c, v| {
            c.name = expect_string("name", v)?;
            Ok(())
        }),
        ("other_name", |c, v| {
            c.other_name = expect_string("other_name", v)?;
            Ok(())
        }),
        ("phone", |c, v| {
            c.phone = expect_string("phone", v)?;
            Ok(())
        }),
        ("web_url", |c, v| {
            c.web_url = expect_string("web_url", v)?;
            Ok(())
        }),
        ("required_fields", |c, v| {
            c.required_fields = expect_string_array("required_fields", v)?;
            Ok(())
        }),
    ];
}
