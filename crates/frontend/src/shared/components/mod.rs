pub mod comments;
pub mod newsletter_form;
pub mod recipe_card;
pub mod social_share;
pub mod video_embed;
