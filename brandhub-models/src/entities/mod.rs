pub mod brand;
pub mod brand_contact;
pub mod brand_owner;
pub mod contact;
pub mod history;
pub mod media;
pub mod owner;
pub mod prelude;
pub mod price;
pub mod product;
pub mod statistic;
pub mod user;
