use crate::schema::{CategorySchema, FieldSpec as F, FilterSpec, RecordCategory, Section, col};

const GENDERS: &[&str] = &["Male", "Female", "Other"];
const YES_NO: &[&str] = &["Yes", "No"];

// Household fields shared by most individual-level registers
const HOUSEHOLD_CODE: F = F::text("householdCode", "Household Code");
const HEAD_OF_HOUSEHOLD: F = F::text("headOfHousehold", "Head of Household");
const WARD_NO: F = F::text("wardNo", "Ward No").required();
const HABITATION: F = F::text("habitation", "Habitation");
const PROJECT_RESPONSIBLE: F = F::text("projectResponsible", "Project Responsible");
const DATE_OF_REPORTING: F = F::date("dateOfReporting", "Date of Reporting");
const REPORTED_BY: F = F::text("reportedBy", "Reported By");
const GENDER: F = F::select("gender", "Gender", GENDERS).required();
const CONTACT_NO: F = F::phone("contactNo", "Contact No");
const SERVICES_PROVIDED: F = F::area("servicesProvided", "Services Provided");
const REFERRALS_GIVEN: F = F::area("referralsGiven", "Referrals Given");
const REMARKS: F = F::area("remarks", "Remarks");

const GENDER_FILTER: FilterSpec = FilterSpec::select("gender", "Gender", GENDERS);
const WARD_FILTER: FilterSpec = FilterSpec::text("wardNo", "Ward No");
const HABITATION_FILTER: FilterSpec = FilterSpec::text("habitation", "Habitation");

const fn schema(
    category: RecordCategory,
    title: &'static str,
    noun: &'static str,
    section: Section,
    path: &'static str,
    endpoint: &'static str,
    keys: (&'static str, &'static str),
) -> CategorySchema {
    CategorySchema {
        category,
        title,
        noun,
        section,
        path,
        aliases: &[],
        endpoint,
        collection_key: keys.0,
        singular_key: keys.1,
        fields: &[],
        filters: &[],
        columns: &[],
        remote_filters: false,
    }
}

// =========================================================
// General
// =========================================================

const BENEFICIARY_CATEGORIES: &[&str] = &["Education", "Health", "Social Justice", "General"];

pub const BENEFICIARIES: CategorySchema = CategorySchema {
    fields: &[
        F::text("name", "Full Name").required(),
        GENDER,
        F::range("age", "Age", 0.0, 120.0).required(),
        CONTACT_NO,
        F::area("address", "Address"),
        WARD_NO,
        HABITATION,
        F::select("category", "Category", BENEFICIARY_CATEGORIES),
        F::select("status", "Status", &["Active", "Inactive"]),
        F::date("registrationDate", "Registration Date"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("category", "Category", BENEFICIARY_CATEGORIES),
        GENDER_FILTER,
        FilterSpec::select("status", "Status", &["Active", "Inactive"]),
    ],
    columns: &[
        col("name", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("wardNo", "Ward"),
        col("category", "Category"),
        col("status", "Status"),
    ],
    ..schema(
        RecordCategory::Beneficiaries,
        "Beneficiaries",
        "Beneficiary",
        Section::General,
        "/beneficiaries",
        "/beneficiaries",
        ("beneficiaries", "beneficiary"),
    )
};

// =========================================================
// Education
// =========================================================

pub const STUDY_CENTERS: CategorySchema = CategorySchema {
    fields: &[
        F::text("centreName", "Centre Name").required(),
        F::text("sourceOfFunding", "Source of Funding"),
        F::area("infrastructure", "Infrastructure"),
        F::text("timing", "Timing"),
        F::text("studentsLevelOfEducation", "Students' Level of Education"),
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        F::date("dateOfEstablishment", "Date of Establishment"),
        F::range("totalStudents", "Total Students", 0.0, 10_000.0),
        F::text("groupLeader", "Group Leader"),
        F::phone("groupLeaderContact", "Group Leader Contact"),
    ],
    filters: &[
        FilterSpec::remote("wardNo", "Ward No", "wardNumbers"),
        FilterSpec::remote("projectResponsible", "Project Responsible", "projectResponsibles"),
    ],
    columns: &[
        col("centreName", "Centre"),
        col("wardNo", "Ward"),
        col("habitation", "Habitation"),
        col("totalStudents", "Students"),
        col("projectResponsible", "Responsible"),
    ],
    remote_filters: true,
    ..schema(
        RecordCategory::StudyCenters,
        "Study Centers",
        "Study center",
        Section::Education,
        "/education/study-centers",
        "/study-centers",
        ("data", "studyCenter"),
    )
};

pub const SC_STUDENTS: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("name", "Student Name").required(),
        GENDER,
        F::range("age", "Age", 3.0, 25.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        DATE_OF_REPORTING,
        REPORTED_BY,
        F::area("natureOfIssue", "Nature of Issue"),
        F::date("dateOfMedicalScreening", "Date of Medical Screening"),
        F::area("medicalScreeningResults", "Medical Screening Results"),
        F::date("dateOfPsychologicalAssessment", "Date of Psychological Assessment"),
        F::area("psychologicalScreeningResults", "Psychological Screening Results"),
        F::date("dateOfEducationalAssessment", "Date of Educational Assessment"),
        F::area("educationalScreeningResults", "Educational Screening Results"),
        F::date("dateOfCareerCounselling", "Date of Career Counselling"),
        F::area("counselingReport", "Counseling Report"),
        F::area("individualCarePlan", "Individual Care Plan"),
    ],
    filters: &[
        FilterSpec::remote("wardNo", "Ward No", "wardNumbers"),
        FilterSpec::remote("gender", "Gender", "genders"),
        FilterSpec::remote("projectResponsible", "Project Responsible", "projectResponsibles"),
    ],
    columns: &[
        col("name", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("wardNo", "Ward"),
        col("projectResponsible", "Responsible"),
        col("dateOfReporting", "Reported"),
    ],
    remote_filters: true,
    ..schema(
        RecordCategory::StudyCenterStudents,
        "Study Center Students",
        "Student",
        Section::Education,
        "/education/sc-students",
        "/sc-students",
        ("data", "scStudent"),
    )
};

const DOCUMENTS_CHECK: &[F] = &[
    F::checkbox("birthCertificate", "Birth Certificate"),
    F::checkbox("polioCard", "Polio Card"),
    F::checkbox("adharCard", "Aadhaar Card"),
    F::checkbox("transferCertificate", "Transfer Certificate"),
];

const ENROLLMENT_STATUSES: &[&str] = &["Pending", "Enrolled", "Not Enrolled", "In Progress"];

pub const DROPOUTS: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("name", "Name").required(),
        GENDER,
        F::range("age", "Age", 5.0, 25.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        DATE_OF_REPORTING,
        REPORTED_BY,
        F::range("yearOfDropout", "Year of Dropout", 1990.0, 2100.0),
        F::text("educationLevelWhenDropout", "Education Level at Dropout"),
        F::text("schoolNameWhenDropout", "School at Dropout"),
        F::area("reasonForDropout", "Reason for Dropout"),
        F::group("documentsCheck", "Documents Check", DOCUMENTS_CHECK),
        F::date("dateOfEducationalAssessment", "Date of Educational Assessment"),
        F::area("educationalScreeningResults", "Educational Screening Results"),
        F::area("careerCounselling", "Career Counselling"),
        F::area("counselingReport", "Counseling Report"),
        F::area("individualCarePlan", "Individual Care Plan"),
        F::select("enrollmentStatus", "Enrollment Status", ENROLLMENT_STATUSES),
        F::date("dateOfReAdmission", "Date of Re-admission"),
        F::text("educationLevelWhenReAdmission", "Education Level at Re-admission"),
        F::text("schoolNameWhenReAdmission", "School at Re-admission"),
    ],
    filters: &[
        WARD_FILTER,
        GENDER_FILTER,
        FilterSpec::select("enrollmentStatus", "Enrollment Status", ENROLLMENT_STATUSES),
    ],
    columns: &[
        col("name", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("yearOfDropout", "Dropout Year"),
        col("wardNo", "Ward"),
        col("enrollmentStatus", "Enrollment"),
    ],
    ..schema(
        RecordCategory::Dropouts,
        "Dropouts",
        "Dropout",
        Section::Education,
        "/education/dropouts",
        "/dropouts",
        ("data", "dropout"),
    )
};

const SCHOOL_TYPES: &[&str] = &["Government", "Government Aided", "Private", "Madrasa", "Other"];

pub const SCHOOLS: CategorySchema = CategorySchema {
    fields: &[
        F::text("schoolName", "School Name").required(),
        F::text("udiseCode", "UDISE Code"),
        F::select("schoolType", "School Type", SCHOOL_TYPES),
        F::text("principalName", "Principal Name"),
        F::phone("contactNo", "Contact No"),
        WARD_NO,
        HABITATION,
        F::range("totalStudents", "Total Students", 0.0, 20_000.0),
        F::range("totalTeachers", "Total Teachers", 0.0, 1_000.0),
        PROJECT_RESPONSIBLE,
        F::date("dateOfVisit", "Date of Visit"),
        F::area("interventions", "Interventions"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("schoolType", "School Type", SCHOOL_TYPES),
        WARD_FILTER,
    ],
    columns: &[
        col("schoolName", "School"),
        col("schoolType", "Type"),
        col("wardNo", "Ward"),
        col("totalStudents", "Students"),
        col("principalName", "Principal"),
    ],
    ..schema(
        RecordCategory::Schools,
        "Schools",
        "School",
        Section::Education,
        "/education/schools",
        "/schools",
        ("schools", "school"),
    )
};

const EXAM_TYPES: &[&str] = &["UPSC", "SSC", "Railway", "Banking", "State PCS", "Police", "Other"];
const EXAM_RESULTS: &[&str] = &["Pending", "Qualified", "Not Qualified"];

pub const COMPETITIVE_EXAMS: CategorySchema = CategorySchema {
    fields: &[
        F::text("studentName", "Student Name").required(),
        GENDER,
        F::range("age", "Age", 16.0, 45.0),
        CONTACT_NO,
        WARD_NO,
        HABITATION,
        F::select("examType", "Exam Type", EXAM_TYPES).required(),
        F::text("coachingCentre", "Coaching Centre"),
        F::date("dateOfEnrollment", "Date of Enrollment"),
        F::date("examDate", "Exam Date"),
        F::select("result", "Result", EXAM_RESULTS),
        PROJECT_RESPONSIBLE,
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("examType", "Exam Type", EXAM_TYPES),
        FilterSpec::select("result", "Result", EXAM_RESULTS),
    ],
    columns: &[
        col("studentName", "Student"),
        col("examType", "Exam"),
        col("examDate", "Exam Date"),
        col("result", "Result"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::CompetitiveExams,
        "Competitive Exams",
        "Competitive exam",
        Section::Education,
        "/education/competitive-exams",
        "/competitive-exams",
        ("competitiveExams", "competitiveExam"),
    )
};

const BOARD_TYPES: &[&str] = &["CBSE", "ICSE", "State Board", "Open School"];
const BOARD_CLASSES: &[&str] = &["10", "12"];

pub const BOARD_PREPARATION: CategorySchema = CategorySchema {
    fields: &[
        F::text("studentName", "Student Name").required(),
        GENDER,
        F::select("classStandard", "Class", BOARD_CLASSES).required(),
        F::select("boardType", "Board", BOARD_TYPES),
        F::text("schoolName", "School Name"),
        CONTACT_NO,
        WARD_NO,
        HABITATION,
        F::area("subjectsSupported", "Subjects Supported"),
        F::date("dateOfEnrollment", "Date of Enrollment"),
        F::range("resultPercentage", "Result (%)", 0.0, 100.0),
        F::select("status", "Status", &["Preparing", "Appeared", "Passed", "Failed"]),
        PROJECT_RESPONSIBLE,
    ],
    filters: &[
        FilterSpec::select("boardType", "Board", BOARD_TYPES),
        FilterSpec::select("classStandard", "Class", BOARD_CLASSES),
    ],
    columns: &[
        col("studentName", "Student"),
        col("classStandard", "Class"),
        col("boardType", "Board"),
        col("schoolName", "School"),
        col("status", "Status"),
    ],
    ..schema(
        RecordCategory::BoardPreparation,
        "Board Preparation",
        "Board preparation",
        Section::Education,
        "/education/board-preparation",
        "/board-preparation",
        ("boardPreparations", "boardPreparation"),
    )
};

// =========================================================
// Health
// =========================================================

const CAMP_TYPES: &[&str] = &[
    "General Health",
    "Eye Care",
    "Dental",
    "Maternal Health",
    "Child Health",
    "Immunization",
    "Screening",
    "Other",
];

pub const HEALTH_CAMPS: CategorySchema = CategorySchema {
    fields: &[
        F::text("campName", "Camp Name").required(),
        F::select("campType", "Camp Type", CAMP_TYPES),
        F::date("dateOfCamp", "Date of Camp").required(),
        F::text("venue", "Venue"),
        WARD_NO,
        HABITATION,
        F::text("doctorName", "Doctor Name"),
        F::range("totalBeneficiaries", "Total Beneficiaries", 0.0, 100_000.0),
        F::range("maleBeneficiaries", "Male Beneficiaries", 0.0, 100_000.0),
        F::range("femaleBeneficiaries", "Female Beneficiaries", 0.0, 100_000.0),
        SERVICES_PROVIDED,
        F::area("medicinesDistributed", "Medicines Distributed"),
        F::range("referrals", "Referrals", 0.0, 100_000.0),
        PROJECT_RESPONSIBLE,
        REMARKS,
    ],
    filters: &[FilterSpec::select("campType", "Camp Type", CAMP_TYPES), WARD_FILTER],
    columns: &[
        col("campName", "Camp"),
        col("campType", "Type"),
        col("dateOfCamp", "Date"),
        col("venue", "Venue"),
        col("totalBeneficiaries", "Beneficiaries"),
    ],
    ..schema(
        RecordCategory::HealthCamps,
        "Health Camps",
        "Health camp",
        Section::Health,
        "/health/health-camps",
        "/health-camps",
        ("healthCamps", "healthCamp"),
    )
};

const LIVING_STATUSES: &[&str] = &["Alone", "With Spouse", "With Family", "Care Home"];

pub const ELDERLY: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("name", "Name").required(),
        GENDER,
        F::range("age", "Age", 60.0, 120.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        F::select("livingStatus", "Living Status", LIVING_STATUSES),
        F::select("pensionStatus", "Receives Pension", YES_NO),
        F::area("healthConditions", "Health Conditions"),
        SERVICES_PROVIDED,
        DATE_OF_REPORTING,
        REPORTED_BY,
    ],
    filters: &[
        GENDER_FILTER,
        FilterSpec::select("livingStatus", "Living Status", LIVING_STATUSES),
        WARD_FILTER,
    ],
    columns: &[
        col("name", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("livingStatus", "Living"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::Elderly,
        "Elderly",
        "Elderly",
        Section::Health,
        "/health/elderly",
        "/elderly",
        ("elderly", "elderly"),
    )
};

const PREGNANCY_STATUSES: &[&str] = &["Pregnant", "Lactating", "Neither"];
const IMMUNIZATION_STATUSES: &[&str] = &["Up to date", "Partial", "Not started"];

pub const MOTHER_CHILD: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("motherName", "Mother's Name").required(),
        F::range("age", "Mother's Age", 13.0, 55.0),
        CONTACT_NO,
        WARD_NO,
        HABITATION,
        F::select("pregnancyStatus", "Pregnancy Status", PREGNANCY_STATUSES),
        F::date("expectedDeliveryDate", "Expected Delivery Date"),
        F::range("ancVisits", "ANC Visits", 0.0, 20.0),
        F::text("childName", "Child's Name"),
        F::date("childDateOfBirth", "Child's Date of Birth"),
        F::select("childGender", "Child's Gender", GENDERS),
        F::select("immunizationStatus", "Immunization Status", IMMUNIZATION_STATUSES),
        F::text("nutritionalStatus", "Nutritional Status"),
        DATE_OF_REPORTING,
        REPORTED_BY,
    ],
    filters: &[
        FilterSpec::select("pregnancyStatus", "Pregnancy Status", PREGNANCY_STATUSES),
        FilterSpec::select("immunizationStatus", "Immunization", IMMUNIZATION_STATUSES),
        WARD_FILTER,
    ],
    columns: &[
        col("motherName", "Mother"),
        col("pregnancyStatus", "Status"),
        col("childName", "Child"),
        col("immunizationStatus", "Immunization"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::MotherChild,
        "Mother & Child",
        "Mother & child",
        Section::Health,
        "/health/mother-child",
        "/mother-child",
        ("motherChild", "motherChild"),
    )
};

const DISABILITY_TYPES: &[&str] = &[
    "Physical",
    "Visual",
    "Hearing",
    "Speech",
    "Intellectual",
    "Mental",
    "Multiple",
];
const DISABILITY_SEVERITIES: &[&str] = &["Mild", "Moderate", "Severe", "Profound"];

pub const PWD: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("nameOfPwd", "Name").required(),
        F::text("uniqueId", "Unique ID"),
        GENDER,
        F::range("age", "Age", 0.0, 120.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        F::select("disabilityType", "Disability Type", DISABILITY_TYPES).required(),
        F::select("disabilitySeverity", "Severity", DISABILITY_SEVERITIES),
        F::select("disabilityCertificate", "Disability Certificate", &["Yes", "No", "Applied"]),
        DATE_OF_REPORTING,
        REPORTED_BY,
        F::area("medicalAssessment", "Medical Assessment"),
        F::area("functionalAssessment", "Functional Assessment"),
        F::area("psychosocialAssessment", "Psychosocial Assessment"),
        F::area("rehabilitationNeeds", "Rehabilitation Needs"),
        F::area("assistiveDevicesProvided", "Assistive Devices Provided"),
        SERVICES_PROVIDED,
        REFERRALS_GIVEN,
    ],
    filters: &[
        GENDER_FILTER,
        FilterSpec::select("disabilityType", "Disability Type", DISABILITY_TYPES),
        FilterSpec::select("disabilitySeverity", "Severity", DISABILITY_SEVERITIES),
        WARD_FILTER,
        HABITATION_FILTER,
    ],
    columns: &[
        col("nameOfPwd", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("disabilityType", "Disability"),
        col("disabilitySeverity", "Severity"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::Pwd,
        "Persons with Disabilities",
        "PWD",
        Section::Health,
        "/health/pwd",
        "/pwd",
        ("pwd", "pwd"),
    )
};

const EDUCATION_STATUSES: &[&str] = &["In School", "Dropped Out", "Never Enrolled", "Completed"];

pub const ADOLESCENTS: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("nameOfAdolescent", "Name").required(),
        F::text("uniqueId", "Unique ID"),
        GENDER,
        F::range("age", "Age", 10.0, 19.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        DATE_OF_REPORTING,
        REPORTED_BY,
        F::select("educationStatus", "Education Status", EDUCATION_STATUSES),
        F::text("schoolName", "School Name"),
        F::text("class", "Class"),
        F::select("healthStatus", "Health Status", &["Healthy", "At Risk", "Needs Attention"]),
        F::text("nutritionalStatus", "Nutritional Status"),
        F::text("mentalHealthStatus", "Mental Health Status"),
        F::area("riskBehaviors", "Risk Behaviors"),
        F::area("socialSkillsAssessment", "Social Skills Assessment"),
        F::area("vocationalInterests", "Vocational Interests"),
        SERVICES_PROVIDED,
        REFERRALS_GIVEN,
    ],
    filters: &[
        GENDER_FILTER,
        FilterSpec::select("ageGroup", "Age Group", &["10-12", "13-15", "16-19"]),
        FilterSpec::select("educationStatus", "Education Status", EDUCATION_STATUSES),
        WARD_FILTER,
        HABITATION_FILTER,
    ],
    columns: &[
        col("nameOfAdolescent", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("educationStatus", "Education"),
        col("healthStatus", "Health"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::Adolescents,
        "Adolescents",
        "Adolescent",
        Section::Health,
        "/health/adolescents",
        "/adolescents",
        ("adolescents", "adolescent"),
    )
};

const CONDITION_TYPES: &[&str] = &["Tuberculosis", "HIV", "Leprosy", "Addiction", "Other Disease"];
const TREATMENT_STATUSES: &[&str] = &["Ongoing", "Completed", "Follow-up Required", "Referred", "Discontinued"];

pub const TB_HIV_ADDICT: CategorySchema = CategorySchema {
    fields: &[
        HOUSEHOLD_CODE,
        F::text("name", "Name").required(),
        GENDER,
        F::range("age", "Age", 0.0, 120.0).required(),
        CONTACT_NO,
        HEAD_OF_HOUSEHOLD,
        WARD_NO,
        HABITATION,
        F::select("conditionType", "Condition", CONDITION_TYPES).required(),
        F::date("diagnosisDate", "Diagnosis Date"),
        F::select("treatmentStatus", "Treatment Status", TREATMENT_STATUSES),
        F::text("treatmentCentre", "Treatment Centre"),
        F::select("counsellingProvided", "Counselling Provided", YES_NO),
        SERVICES_PROVIDED,
        REFERRALS_GIVEN,
        DATE_OF_REPORTING,
        REPORTED_BY,
    ],
    filters: &[
        FilterSpec::select("conditionType", "Condition", CONDITION_TYPES),
        FilterSpec::select("treatmentStatus", "Treatment Status", TREATMENT_STATUSES),
        GENDER_FILTER,
    ],
    columns: &[
        col("name", "Name"),
        col("gender", "Gender"),
        col("age", "Age"),
        col("conditionType", "Condition"),
        col("treatmentStatus", "Treatment"),
        col("wardNo", "Ward"),
    ],
    ..schema(
        RecordCategory::TbHivAddict,
        "TB / HIV / Addiction",
        "Case",
        Section::Health,
        "/health/tb-hiv-addict",
        "/tb-hiv-addict",
        ("tbhivAddict", "tbhivAddict"),
    )
};

// =========================================================
// Social Justice
// =========================================================

const OFFICE_BEARER: &[F] = &[
    F::text("name", "Name"),
    F::phone("contactNo", "Contact No"),
    F::text("education", "Education"),
    F::text("occupation", "Occupation"),
    F::text("experience", "Experience"),
];

const GROUP_TYPES: &[&str] = &[
    "CBUCBO",
    "SHG",
    "Youth Group",
    "Women Group",
    "Farmer Producer Group",
    "Other",
];
const GROUP_STATUSES: &[&str] = &["Active", "Inactive", "Dissolved", "Merged"];

pub const CBUCBO: CategorySchema = CategorySchema {
    fields: &[
        F::text("groupId", "Group ID"),
        F::text("groupName", "Group Name").required(),
        F::select("groupType", "Group Type", GROUP_TYPES).required(),
        F::text("functionalArea", "Functional Area"),
        WARD_NO,
        HABITATION,
        PROJECT_RESPONSIBLE,
        F::date("dateOfFormation", "Date of Formation"),
        F::range("totalMembers", "Total Members", 0.0, 10_000.0),
        F::text("groupLeader", "Group Leader"),
        CONTACT_NO,
        F::group("president", "President", OFFICE_BEARER),
        F::group("secretary", "Secretary", OFFICE_BEARER),
        F::group("treasurer", "Treasurer", OFFICE_BEARER),
        F::select("meetingFrequency", "Meeting Frequency", &["Weekly", "Bi-weekly", "Monthly", "Quarterly"]),
        F::date("lastMeetingDate", "Last Meeting Date"),
        F::area("bankAccountDetails", "Bank Account Details"),
        F::number("savingsAmount", "Savings Amount"),
        F::number("loanAmount", "Loan Amount"),
        F::select("status", "Status", GROUP_STATUSES),
        F::area("achievements", "Achievements"),
        F::area("challenges", "Challenges"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("status", "Status", GROUP_STATUSES),
        FilterSpec::select("groupType", "Group Type", GROUP_TYPES),
    ],
    columns: &[
        col("groupName", "Group"),
        col("groupType", "Type"),
        col("president.name", "President"),
        col("totalMembers", "Members"),
        col("wardNo", "Ward"),
        col("status", "Status"),
    ],
    ..schema(
        RecordCategory::CbuCbo,
        "CBU / CBO Details",
        "CBUCBO",
        Section::SocialJustice,
        "/social-justice/cbucbo-details",
        "/cbucbo-details",
        ("cbucboDetails", "cbucboDetail"),
    )
};

const ENTITLEMENT_TYPES: &[&str] = &[
    "Pension Scheme",
    "Housing Scheme",
    "Health Insurance",
    "Education Scholarship",
    "Employment Guarantee",
    "Food Security",
    "Financial Assistance",
    "Social Security",
    "Disability Benefits",
    "Senior Citizen Benefits",
    "Women Welfare",
    "Child Welfare",
];
const ENTITLEMENT_STATUSES: &[&str] = &[
    "Applied",
    "Under Verification",
    "Approved",
    "Disbursed",
    "Rejected",
    "On Hold",
];

pub const ENTITLEMENTS: CategorySchema = CategorySchema {
    fields: &[
        F::text("beneficiaryId", "Beneficiary ID"),
        F::text("beneficiaryName", "Beneficiary Name").required(),
        F::range("age", "Age", 0.0, 120.0),
        F::select("gender", "Gender", GENDERS),
        F::phone("contactNumber", "Contact Number"),
        F::area("address", "Address"),
        WARD_NO,
        HABITATION,
        F::select("entitlementType", "Entitlement Type", ENTITLEMENT_TYPES).required(),
        F::area("entitlementDetails", "Entitlement Details"),
        F::date("applicationDate", "Application Date"),
        F::area("documentsSubmitted", "Documents Submitted"),
        F::select(
            "verificationStatus",
            "Verification Status",
            &["Pending", "In Progress", "Completed", "Additional Documents Required"],
        ),
        F::date("approvalDate", "Approval Date"),
        F::date("disbursementDate", "Disbursement Date"),
        F::number("amountDisbursed", "Amount Disbursed"),
        F::select("status", "Status", ENTITLEMENT_STATUSES),
        F::checkbox("followUpRequired", "Follow-up Required"),
        F::date("nextFollowUpDate", "Next Follow-up Date"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("status", "Status", ENTITLEMENT_STATUSES),
        FilterSpec::select("entitlementType", "Entitlement Type", ENTITLEMENT_TYPES),
    ],
    columns: &[
        col("beneficiaryName", "Beneficiary"),
        col("entitlementType", "Entitlement"),
        col("applicationDate", "Applied"),
        col("amountDisbursed", "Amount"),
        col("status", "Status"),
    ],
    ..schema(
        RecordCategory::Entitlements,
        "Entitlements",
        "Entitlement",
        Section::SocialJustice,
        "/social-justice/entitlements",
        "/entitlements",
        ("entitlements", "entitlement"),
    )
};

const CASE_TYPES: &[&str] = &[
    "Civil Case",
    "Criminal Case",
    "Family Dispute",
    "Property Dispute",
    "Consumer Case",
    "Labor Dispute",
    "Domestic Violence",
    "Child Custody",
    "Divorce Proceedings",
    "Maintenance Case",
    "Adoption",
    "Legal Documentation",
    "RTI Application",
    "Compensation Claim",
    "Other",
];
const CASE_STATUSES: &[&str] = &[
    "Open",
    "In Progress",
    "Hearing Scheduled",
    "Under Review",
    "Resolved",
    "Closed",
    "Dismissed",
    "Settled",
];

pub const LEGAL_AID: CategorySchema = CategorySchema {
    aliases: &["/legal-aid"],
    fields: &[
        F::text("caseId", "Case ID"),
        F::text("clientName", "Client Name").required(),
        F::range("age", "Age", 0.0, 120.0),
        F::select("gender", "Gender", GENDERS),
        F::phone("contactNumber", "Contact Number"),
        F::area("address", "Address"),
        WARD_NO,
        HABITATION,
        F::select("caseType", "Case Type", CASE_TYPES).required(),
        F::area("caseDescription", "Case Description"),
        F::date("dateRegistered", "Date Registered"),
        F::text("lawyerAssigned", "Lawyer Assigned"),
        F::phone("lawyerContact", "Lawyer Contact"),
        F::text("courtName", "Court Name"),
        F::text("caseNumber", "Case Number"),
        F::date("nextHearingDate", "Next Hearing Date"),
        F::select("caseStatus", "Case Status", CASE_STATUSES),
        F::area("documentsRequired", "Documents Required"),
        F::area("documentsSubmitted", "Documents Submitted"),
        F::area("legalAdviceGiven", "Legal Advice Given"),
        F::number("serviceCharges", "Service Charges"),
        F::select(
            "paymentStatus",
            "Payment Status",
            &["Pending", "Partial Payment", "Paid", "Waived", "Pro Bono"],
        ),
        F::area("outcome", "Outcome"),
        F::checkbox("followUpRequired", "Follow-up Required"),
        F::date("nextFollowUpDate", "Next Follow-up Date"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("status", "Status", CASE_STATUSES),
        FilterSpec::select("caseType", "Case Type", CASE_TYPES),
    ],
    columns: &[
        col("caseId", "Case ID"),
        col("clientName", "Client"),
        col("caseType", "Case Type"),
        col("nextHearingDate", "Next Hearing"),
        col("caseStatus", "Status"),
    ],
    ..schema(
        RecordCategory::LegalAid,
        "Legal Aid Services",
        "Legal aid",
        Section::SocialJustice,
        "/social-justice/legal-aid",
        "/legal-aid-services",
        ("legalAidServices", "legalAidService"),
    )
};

const WORKSHOP_CATEGORIES: &[&str] = &[
    "Health Awareness",
    "Education",
    "Legal Rights",
    "Women Empowerment",
    "Child Protection",
    "Skill Development",
    "Digital Literacy",
    "Financial Literacy",
    "Environmental Awareness",
    "Social Justice",
    "Community Development",
    "Government Schemes",
    "Hygiene & Sanitation",
    "Nutrition",
    "Other",
];
const WORKSHOP_STATUSES: &[&str] = &["Scheduled", "Ongoing", "Completed", "Cancelled", "Postponed"];

pub const WORKSHOPS: CategorySchema = CategorySchema {
    aliases: &["/workshops"],
    fields: &[
        F::text("workshopTitle", "Workshop Title").required(),
        F::area("description", "Description"),
        F::select("category", "Category", WORKSHOP_CATEGORIES).required(),
        F::text("facilitator", "Facilitator"),
        F::phone("facilitatorContact", "Facilitator Contact"),
        F::text("venue", "Venue"),
        WARD_NO,
        HABITATION,
        F::date("dateScheduled", "Date Scheduled").required(),
        F::text("timeScheduled", "Time"),
        F::text("duration", "Duration"),
        F::range("maxParticipants", "Max Participants", 0.0, 10_000.0),
        F::select(
            "targetAudience",
            "Target Audience",
            &[
                "Women",
                "Children",
                "Youth",
                "Adults",
                "Senior Citizens",
                "Adolescents",
                "Students",
                "Community Leaders",
                "Self Help Groups",
                "General Public",
            ],
        ),
        F::area("objectives", "Objectives"),
        F::area("materialsRequired", "Materials Required"),
        F::range("totalParticipants", "Total Participants", 0.0, 10_000.0),
        F::range("maleParticipants", "Male Participants", 0.0, 10_000.0),
        F::range("femaleParticipants", "Female Participants", 0.0, 10_000.0),
        F::select("status", "Status", WORKSHOP_STATUSES),
        F::area("feedback", "Feedback"),
        F::area("outcome", "Outcome"),
        F::checkbox("followUpRequired", "Follow-up Required"),
        F::date("followUpDate", "Follow-up Date"),
        F::number("cost", "Cost"),
        F::text("fundingSource", "Funding Source"),
        F::checkbox("certificates", "Certificates Issued"),
        REMARKS,
    ],
    filters: &[
        FilterSpec::select("status", "Status", WORKSHOP_STATUSES),
        FilterSpec::select("category", "Category", WORKSHOP_CATEGORIES),
    ],
    columns: &[
        col("workshopTitle", "Title"),
        col("category", "Category"),
        col("dateScheduled", "Date"),
        col("venue", "Venue"),
        col("totalParticipants", "Participants"),
        col("status", "Status"),
    ],
    ..schema(
        RecordCategory::Workshops,
        "Workshops & Awareness",
        "Workshop",
        Section::SocialJustice,
        "/social-justice/workshops",
        "/workshop-and-awareness",
        ("workshops", "workshop"),
    )
};
