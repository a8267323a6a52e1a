mod clean_repository_reports_nothing;
