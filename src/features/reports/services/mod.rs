mod report_feed_service;

pub use report_feed_service::ReportFeedService;
