pub mod fetch_wallpaper;
pub mod report_request;
pub mod run_application;

pub use fetch_wallpaper::FetchWallpaperUseCase;
pub use report_request::ReportRequestUseCase;
pub use run_application::RunApplicationUseCase;
