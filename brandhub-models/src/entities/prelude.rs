pub use super::brand::{
    ActiveModel as BrandActiveModel, Column as BrandColumn, Entity as Brand, Model as BrandModel,
};
pub use super::brand_contact::{
    ActiveModel as BrandContactActiveModel, Column as BrandContactColumn, Entity as BrandContact,
    Model as BrandContactModel,
};
pub use super::brand_owner::{
    ActiveModel as BrandOwnerActiveModel, Column as BrandOwnerColumn, Entity as BrandOwner,
    Model as BrandOwnerModel,
};
pub use super::contact::{
    ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as Contact,
    Model as ContactModel,
};
pub use super::history::{Entity as History, Model as HistoryModel};
pub use super::media::{
    ActiveModel as MediaActiveModel, Column as MediaColumn, Entity as Media, Model as MediaModel,
};
pub use super::owner::{
    ActiveModel as OwnerActiveModel, Column as OwnerColumn, Entity as Owner, Model as OwnerModel,
};
pub use super::price::{
    ActiveModel as PriceActiveModel, Column as PriceColumn, Entity as Price, Model as PriceModel,
};
pub use super::product::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as Product,
    Model as ProductModel,
};
pub use super::statistic::{
    ActiveModel as StatisticActiveModel, Column as StatisticColumn, Entity as Statistic,
    Model as StatisticModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};
