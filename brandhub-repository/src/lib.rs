pub mod brand;
pub mod builder;
pub mod contact;
pub mod media;
pub mod owner;
pub mod price;
pub mod product;
pub mod statistic;
pub mod user;

pub use brand::BrandRepository;
pub use contact::ContactRepository;
pub use media::MediaRepository;
pub use owner::OwnerRepository;
pub use price::PriceRepository;
pub use product::ProductRepository;
pub use statistic::StatisticRepository;
pub use user::UserRepository;
