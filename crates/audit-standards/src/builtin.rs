//! Built-in catalogue of ICAI Standards on Auditing.

/// `(code, name)` pairs in display order.
pub const ICAI_STANDARDS: &[(&str, &str)] = &[
    (
        "SA 200",
        "Overall Objectives of the Independent Auditor and the Conduct of an Audit in Accordance with Standards on Auditing",
    ),
    ("SA 210", "Agreeing the Terms of Audit Engagements"),
    ("SA 220", "Quality Control for an Audit of Financial Statements"),
    ("SA 230", "Audit Documentation"),
    (
        "SA 240",
        "The Auditor’s Responsibilities Relating to Fraud in an Audit of Financial Statements",
    ),
    (
        "SA 250",
        "Consideration of Laws and Regulations in an Audit of Financial Statements",
    ),
    ("SA 260", "Communication with Those Charged with Governance"),
    (
        "SA 265",
        "Communicating Deficiencies in Internal Control to Those Charged with Governance and Management",
    ),
    ("SA 299", "Responsibility of Joint Auditors"),
    ("SA 300", "Planning an Audit of Financial Statements"),
    ("SA 315", "Identifying and Assessing the Risks of Material Misstatement"),
    ("SA 320", "Materiality in Planning and Performing an Audit"),
    ("SA 330", "Auditor’s Responses to Assessed Risks"),
    (
        "SA 402",
        "Audit Considerations Relating to an Entity Using a Service Organization",
    ),
    ("SA 450", "Evaluation of Misstatements Identified during the Audit"),
    ("SA 500", "Audit Evidence"),
    ("SA 501", "Audit Evidence – Specific Considerations for Selected Items"),
    ("SA 505", "External Confirmations"),
    ("SA 510", "Initial Audit Engagements – Opening Balances"),
    ("SA 520", "Analytical Procedures"),
    ("SA 530", "Audit Sampling"),
    (
        "SA 540",
        "Auditing Accounting Estimates, Including Fair Value Accounting Estimates, and Related Disclosures",
    ),
    ("SA 550", "Related Parties"),
    ("SA 560", "Subsequent Events"),
    ("SA 570", "Going Concern"),
    ("SA 580", "Written Representations"),
    ("SA 600", "Using the Work of Another Auditor"),
    ("SA 610", "Using the Work of Internal Auditors"),
    ("SA 620", "Using the Work of an Auditor’s Expert"),
    ("SA 700", "Forming an Opinion and Reporting on Financial Statements"),
    ("SA 701", "Communicating Key Audit Matters in the Independent Auditor’s Report"),
    ("SA 705", "Modifications to the Opinion in the Independent Auditor’s Report"),
    (
        "SA 706",
        "Emphasis of Matter Paragraphs and Other Matter Paragraphs in the Independent Auditor’s Report",
    ),
    (
        "SA 710",
        "Comparative Information – Corresponding Figures and Comparative Financial Statements",
    ),
    ("SA 720", "The Auditor’s Responsibilities Relating to Other Information"),
    (
        "SA 800",
        "Special Considerations—Audits of Financial Statements Prepared in Accordance with Special Purpose Frameworks",
    ),
    (
        "SA 805",
        "Special Considerations—Audits of Single Financial Statements and Specific Elements, Accounts or Items of a Financial Statement",
    ),
    ("SA 810", "Engagements to Report on Summary Financial Statements"),
];
