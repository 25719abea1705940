pub(crate) const RESPONSE_SUFFIX: &str = "Response";
pub(crate) const ITEM_SUFFIX: &str = "Item";
pub(crate) const ID_ACRONYM: &str = "ID";
