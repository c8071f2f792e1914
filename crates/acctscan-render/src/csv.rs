use acctscan_types::ScannedAccount;

const HEADER: [&str; 9] = [
    "Username",
    "Email",
    "Name",
    "Role",
    "Department",
    "Status",
    "Risk Level",
    "Issues",
    "Recommendations",
];

/// Render accounts as CSV. Every field is quoted; rows are `\n`-separated with no trailing newline.
pub fn render_csv<'a, I>(accounts: I) -> String
where
    I: IntoIterator<Item = &'a ScannedAccount>,
{
    let mut rows = vec![row(HEADER.iter().map(|h| h.to_string()))];

    for s in accounts {
        let a = &s.account;
        let r = &s.scan_results;
        let status = match a.status {
            acctscan_types::AccountStatus::Active => "active",
            acctscan_types::AccountStatus::Inactive => "inactive",
        };
        rows.push(row([
            a.username.clone(),
            a.email.clone(),
            a.full_name(),
            a.role.clone(),
            a.department.clone(),
            status.to_string(),
            r.risk_level.as_str().to_string(),
            r.issues.join("; "),
            r.recommendations.join("; "),
        ]));
    }

    rows.join("\n")
}

fn row<I: IntoIterator<Item = String>>(fields: I) -> String {
    fields
        .into_iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
