pub mod brand;
pub mod brand_contact;
pub mod brand_owner;
pub mod contact;
pub mod history;
pub mod media;
pub mod owner;
pub mod price;
pub mod product;
pub mod statistic;
pub mod user;

// Tables are created in ascending order; referenced tables come first.
const INIT_USER_ORDER: i32 = 0;
const INIT_HISTORY_ORDER: i32 = INIT_USER_ORDER + 1;
const INIT_BRAND_ORDER: i32 = INIT_HISTORY_ORDER + 1;

const INIT_CHILD_ORDER: i32 = 100;
const INIT_CONTACT_ORDER: i32 = INIT_CHILD_ORDER + 1;
const INIT_OWNER_ORDER: i32 = INIT_CONTACT_ORDER + 1;
const INIT_STATISTIC_ORDER: i32 = INIT_OWNER_ORDER + 1;
const INIT_PRICE_ORDER: i32 = INIT_STATISTIC_ORDER + 1;
const INIT_PRODUCT_ORDER: i32 = INIT_PRICE_ORDER + 1;
const INIT_MEDIA_ORDER: i32 = INIT_PRODUCT_ORDER + 1;

const INIT_LINK_ORDER: i32 = 1000;
const INIT_BRAND_CONTACT_ORDER: i32 = INIT_LINK_ORDER + 1;
const INIT_BRAND_OWNER_ORDER: i32 = INIT_BRAND_CONTACT_ORDER + 1;
