use crate::models::result::TestResult;
use crate::models::user::UserProfile;

/// Renders the downloadable results report.
///
/// Pure templating, no external calls. Interpolated field values are
/// sanitized so a hostile or mangled model explanation cannot smuggle raw
/// control characters into the report body.
pub struct ReportService;

impl ReportService {
    pub fn render_report(profile: &UserProfile, result: &TestResult) -> String {
        let performance = result
            .performance
            .iter()
            .map(|p| format!("{}: {}%", clean(&p.category), p.percentage))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "GatsIQTest Results\n\
             \n\
             Name: {name}\n\
             Age: {age}\n\
             Country: {country}\n\
             Gender: {gender}\n\
             School: {school}\n\
             \n\
             IQ Score: {score}\n\
             Category: {category}\n\
             Percentile: {percentile}\n\
             \n\
             Performance:\n\
             {performance}\n\
             \n\
             Explanation:\n\
             {explanation}\n",
            name = clean(&profile.name),
            age = profile.age,
            country = clean(&profile.country),
            gender = clean(profile.gender.as_deref().unwrap_or("Not specified")),
            school = clean(&profile.school),
            score = result.iq_score,
            category = clean(&result.iq_category),
            percentile = result.percentile,
            performance = performance,
            explanation = clean(&result.explanation),
        )
    }

    /// Attachment filename derived from the profile name, whitespace
    /// collapsed to underscores.
    pub fn report_filename(name: &str) -> String {
        let safe: String = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        format!("IQ_Test_Results_{}.pdf", safe)
    }
}

fn clean(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}
