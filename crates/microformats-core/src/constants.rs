//! Microformats2 class names emitted by the formatters.

// Root classes
pub const H_CARD: &str = "h-card";
pub const H_ADR: &str = "h-adr";
pub const H_GEO: &str = "h-geo";

// h-geo properties
pub const P_LATITUDE: &str = "p-latitude";
pub const P_LONGITUDE: &str = "p-longitude";
pub const P_ALTITUDE: &str = "p-altitude";

// h-adr properties
pub const P_STREET_ADDRESS: &str = "p-street-address";
pub const P_EXTENDED_ADDRESS: &str = "p-extended-address";
pub const P_POST_OFFICE_BOX: &str = "p-post-office-box";
pub const P_LOCALITY: &str = "p-locality";
pub const P_REGION: &str = "p-region";
pub const P_POSTAL_CODE: &str = "p-postal-code";
pub const P_COUNTRY: &str = "p-country";
pub const P_GEO: &str = "p-geo";

// Name properties
pub const P_NAME: &str = "p-name";
pub const P_HONORIFIC_PREFIX: &str = "p-honorific-prefix";
pub const P_NICKNAME: &str = "p-nickname";
pub const P_GIVEN_NAME: &str = "p-given-name";
pub const P_ADDITIONAL_NAME: &str = "p-additional-name";
pub const P_FAMILY_NAME: &str = "p-family-name";
pub const P_HONORIFIC_SUFFIX: &str = "p-honorific-suffix";
pub const P_MAIDEN_NAME: &str = "p-maiden-name";

// h-card properties
pub const U_PHOTO: &str = "u-photo";
pub const U_LOGO: &str = "u-logo";
pub const P_ADR: &str = "p-adr";
pub const P_TEL: &str = "p-tel";
pub const U_EMAIL: &str = "u-email";
pub const U_URL: &str = "u-url";
pub const U_IMPP: &str = "u-impp";
pub const P_ORG: &str = "p-org";
pub const P_ORGANIZATION_NAME: &str = "p-organization-name";
pub const P_JOB_TITLE: &str = "p-job-title";
pub const P_ROLE: &str = "p-role";
pub const P_SEX: &str = "p-sex";
pub const P_GENDER: &str = "p-gender";
pub const DT_BDAY: &str = "dt-bday";
pub const DT_ANNIVERSARY: &str = "dt-anniversary";
pub const U_KEY: &str = "u-key";
pub const P_CATEGORY: &str = "p-category";
pub const P_NOTE: &str = "p-note";
