//! Portfolio section: secondary nav with filters, the card grid.

mod filter_bar;
mod portfolio_nav;
mod project_card;
mod project_grid;

pub use filter_bar::FilterBar;
pub use portfolio_nav::PortfolioNav;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
