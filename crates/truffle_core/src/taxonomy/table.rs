//! Static JEL tables.
//!
//! Category order here is the plot x-axis order.

pub(super) const JEL_CATEGORIES: &[(&str, &str)] = &[
    ("A", "General Economics and Teaching"),
    ("B", "History of Economic Thought, Methodology, and Heterodox Approaches"),
    ("C", "Mathematical and Quantitative Methods"),
    ("D", "Microeconomics"),
    ("E", "Macroeconomics and Monetary Economics"),
    ("F", "International Economics"),
    ("G", "Financial Economics"),
    ("H", "Public Economics"),
    ("I", "Health, Education, and Welfare"),
    ("J", "Labor and Demographic Economics"),
    ("K", "Law and Economics"),
    ("L", "Industrial Organization"),
    (
        "M",
        "Business Administration and Business Economics; Marketing; Accounting; Personnel Economics",
    ),
    ("N", "Economic History"),
    (
        "O",
        "Economic Development, Innovation, Technological Change, and Growth",
    ),
    ("P", "Political Economy and Comparative Economic Systems"),
    (
        "Q",
        "Agricultural and Natural Resource Economics; Environmental and Ecological Economics",
    ),
    (
        "R",
        "Urban, Rural, Regional, Real Estate, and Transportation Economics",
    ),
    ("Y", "Miscellaneous Categories"),
    ("Z", "Other Special Topics"),
];

pub(super) const JEL_CODE_DESCRIPTIONS: &[(&str, &str)] = &[
    // A
    ("A00", "General Economics and Teaching: General"),
    ("A10", "General Economics: General"),
    ("A20", "Economic Education and Teaching of Economics: General"),
    // B
    ("B00", "History of Economic Thought, Methodology, and Heterodox Approaches: General"),
    ("B40", "Economic Methodology: General"),
    // C
    ("C00", "Mathematical and Quantitative Methods: General"),
    ("C10", "Econometric and Statistical Methods and Methodology: General"),
    ("C11", "Bayesian Analysis: General"),
    ("C13", "Estimation: General"),
    ("C21", "Cross-Sectional Models; Spatial Models; Treatment Effect Models; Quantile Regressions"),
    ("C23", "Panel Data Models; Spatio-temporal Models"),
    ("C26", "Instrumental Variables (IV) Estimation"),
    ("C32", "Time-Series Models; Dynamic Quantile Regressions; Dynamic Treatment Effect Models; Diffusion Processes; State Space Models"),
    ("C51", "Model Construction and Estimation"),
    ("C70", "Game Theory and Bargaining Theory: General"),
    ("C73", "Stochastic and Dynamic Games; Evolutionary Games; Repeated Games"),
    ("C78", "Bargaining Theory; Matching Theory"),
    ("C83", "Survey Methods; Sampling Methods"),
    ("C90", "Design of Experiments: General"),
    ("C93", "Field Experiments"),
    // D
    ("D00", "Microeconomics: General"),
    ("D10", "Household Behavior: General"),
    ("D13", "Household Production and Intrahousehold Allocation"),
    ("D14", "Household Saving; Personal Finance"),
    ("D20", "Production and Organizations: General"),
    ("D22", "Firm Behavior: Empirical Analysis"),
    ("D23", "Organizational Behavior; Transaction Costs; Property Rights"),
    ("D24", "Production; Cost; Capital; Capital, Total Factor, and Multifactor Productivity; Capacity"),
    ("D30", "Distribution: General"),
    ("D31", "Personal Income, Wealth, and Their Distributions"),
    ("D40", "Market Structure, Pricing, and Design: General"),
    ("D41", "Perfect Competition"),
    ("D43", "Oligopoly and Other Forms of Market Imperfection"),
    ("D44", "Auctions"),
    ("D60", "Welfare Economics: General"),
    ("D63", "Equity, Justice, Inequality, and Other Normative Criteria and Measurement"),
    ("D70", "Analysis of Collective Decision-Making: General"),
    ("D72", "Political Processes: Rent-seeking, Lobbying, Elections, Legislatures, and Voting Behavior"),
    ("D80", "Information, Knowledge, and Uncertainty: General"),
    ("D81", "Criteria for Decision-Making under Risk and Uncertainty"),
    ("D82", "Asymmetric and Private Information; Mechanism Design"),
    ("D83", "Search; Learning; Information and Knowledge; Communication; Belief; Unawareness"),
    ("D85", "Network Formation and Analysis: Theory"),
    ("D86", "Economics of Contract: Theory"),
    ("D90", "Micro-Based Behavioral Economics: General"),
    ("D91", "Role and Effects of Psychological, Emotional, Social, and Cognitive Factors on Decision Making"),
    // E
    ("E00", "Macroeconomics and Monetary Economics: General"),
    ("E20", "Consumption, Saving, Production, Investment, Labor Markets, and Informal Economy: General"),
    ("E24", "Employment; Unemployment; Wages; Intergenerational Income Distribution; Aggregate Human Capital; Aggregate Labor Productivity"),
    ("E30", "Prices, Business Fluctuations, and Cycles: General"),
    ("E31", "Price Level; Inflation; Deflation"),
    ("E32", "Business Fluctuations; Cycles"),
    ("E40", "Money and Interest Rates: General"),
    ("E42", "Monetary Systems; Standards; Regimes; Government and the Monetary System; Payment Systems"),
    ("E44", "Financial Markets and the Macroeconomy"),
    ("E50", "Monetary Policy, Central Banking, and the Supply of Money and Credit: General"),
    ("E52", "Monetary Policy"),
    ("E58", "Central Banks and Their Policies"),
    // F
    ("F00", "International Economics: General"),
    ("F10", "Trade: General"),
    ("F11", "Neoclassical Models of Trade"),
    ("F13", "Trade Policy; International Trade Organizations"),
    ("F18", "Trade and Environment"),
    ("F20", "International Factor Movements and International Business: General"),
    ("F22", "International Migration"),
    ("F23", "Multinational Firms; International Business"),
    ("F30", "International Finance: General"),
    ("F31", "Foreign Exchange"),
    ("F32", "Current Account Adjustment; Short-Term Capital Movements"),
    ("F33", "International Monetary Arrangements and Institutions"),
    ("F40", "Macroeconomic Aspects of International Trade and Finance: General"),
    ("F41", "Open Economy Macroeconomics"),
    ("F42", "International Policy Coordination and Transmission"),
    ("F50", "International Relations, National Security, and International Political Economy: General"),
    ("F51", "International Conflicts; Negotiations; Sanctions"),
    ("F52", "National Security; Economic Nationalism"),
    // G
    ("G00", "Financial Economics: General"),
    ("G10", "General Financial Markets: General"),
    ("G15", "International Financial Markets"),
    ("G20", "Financial Institutions and Services: General"),
    ("G21", "Banks; Depository Institutions; Micro Finance Institutions; Mortgages"),
    ("G23", "Non-bank Financial Institutions; Financial Instruments; Institutional Investors"),
    ("G30", "Corporate Finance and Governance: General"),
    ("G34", "Mergers; Acquisitions; Restructuring; Corporate Governance"),
    ("G50", "Household Finance: General"),
    ("G51", "Household Saving, Borrowing, Debt, and Wealth"),
    // H
    ("H00", "Public Economics: General"),
    ("H20", "Taxation, Subsidies, and Revenue: General"),
    ("H21", "Efficiency; Optimal Taxation"),
    ("H23", "Externalities; Redistributive Effects; Environmental Taxes and Subsidies"),
    ("H24", "Personal Income and Other Nonbusiness Taxes and Subsidies; includes inheritance and gift taxes"),
    ("H25", "Business Taxes and Subsidies"),
    ("H26", "Tax Evasion and Avoidance"),
    ("H50", "National Government Expenditures and Related Policies: General"),
    ("H53", "National Government Expenditures and Welfare Programs"),
    // I
    ("I00", "Health, Education, and Welfare: General"),
    ("I10", "Health: General"),
    ("I11", "Analysis of Health Care Markets"),
    ("I12", "Health Behavior"),
    ("I14", "Health and Inequality"),
    ("I18", "Health: Government Policy; Regulation; Public Health"),
    ("I20", "Education and Research Institutions: General"),
    ("I21", "Analysis of Education"),
    ("I24", "Education and Inequality"),
    ("I26", "Returns to Education"),
    ("I28", "Education: Government Policy"),
    ("I30", "Welfare, Well-Being, and Poverty: General"),
    ("I31", "General Welfare; Well-Being"),
    ("I32", "Measurement and Analysis of Poverty"),
    ("I38", "Welfare, Well-Being, and Poverty: Government Programs; Provision and Effects of Welfare Programs"),
    // J
    ("J00", "Labor and Demographic Economics: General"),
    ("J10", "Demographic Economics: General"),
    ("J12", "Marriage; Marital Dissolution; Family Structure; Domestic Abuse"),
    ("J13", "Fertility; Family Planning; Child Care; Children; Youth"),
    ("J15", "Economics of Minorities, Races, Indigenous Peoples, and Immigrants; Non-labor Discrimination"),
    ("J16", "Economics of Gender; Non-labor Discrimination"),
    ("J20", "Demand and Supply of Labor: General"),
    ("J22", "Time Allocation and Labor Supply"),
    ("J24", "Human Capital; Skills; Occupational Choice; Labor Productivity"),
    ("J30", "Wages, Compensation, and Labor Costs: General"),
    ("J31", "Wage Level and Structure; Wage Differentials"),
    ("J38", "Wages, Compensation, and Labor Costs: Public Policy"),
    ("J40", "Particular Labor Markets: General"),
    ("J43", "Agricultural Labor Markets"),
    ("J60", "Mobility, Unemployment, Vacancies, and Immigrant Workers: General"),
    ("J61", "Geographic Labor Mobility; Immigrant Workers"),
    ("J62", "Job, Occupational, and Intergenerational Mobility"),
    ("J70", "Labor Discrimination: General"),
    ("J71", "Labor Discrimination"),
    // K
    ("K00", "Law and Economics: General"),
    ("K20", "Regulation and Business Law: General"),
    ("K21", "Antitrust Law"),
    ("K30", "Other Substantive Areas of Law: General"),
    ("K32", "Energy, Environmental, Health, and Safety Law"),
    ("K40", "Legal Procedure, the Legal System, and Illegal Behavior: General"),
    ("K41", "Litigation Process"),
    ("K42", "Illegal Behavior and the Enforcement of Law"),
    // L
    ("L00", "Industrial Organization: General"),
    ("L10", "Market Structure, Firm Strategy, and Market Performance: General"),
    ("L15", "Information and Product Quality; Standardization and Compatibility"),
    ("L20", "Firm Objectives, Organization, and Behavior: General"),
    ("L25", "Firm Performance: Size, Diversification, and Scope"),
    ("L40", "Antitrust Issues and Policies: General"),
    ("L50", "Regulation and Industrial Policy: General"),
    ("L51", "Economics of Regulation"),
    ("L90", "Industry Studies: Transportation and Utilities: General"),
    ("L94", "Electric Utilities"),
    ("L95", "Gas Utilities; Pipelines; Water Utilities"),
    // M
    ("M00", "Business Administration and Business Economics; Marketing; Accounting; Personnel Economics: General"),
    ("M10", "Business Administration: General"),
    ("M12", "Personnel Management; Executives; Executive Compensation"),
    ("M16", "International Business Administration"),
    ("M50", "Personnel Economics: General"),
    ("M51", "Firm Employment Decisions; Promotions"),
    ("M54", "Labor Management"),
    // N
    ("N00", "Economic History: General"),
    ("N30", "Labor and Consumers, Demography, Education, Health, Welfare, Income, Wealth, Religion, and Philanthropy: General, International, or Comparative"),
    ("N34", "Labor and Consumers, Demography, Education, Health, Welfare, Income, Wealth, Religion, and Philanthropy: Europe: 1913-"),
    ("N50", "Agriculture, Natural Resources, Environment, and Extractive Industries: General, International, or Comparative"),
    ("N54", "Agriculture, Natural Resources, Environment, and Extractive Industries: Europe: 1913-"),
    // O
    ("O00", "Economic Development, Innovation, Technological Change, and Growth: General"),
    ("O10", "Economic Development: General"),
    ("O12", "Microeconomic Analyses of Economic Development"),
    ("O15", "Human Resources; Human Development; Income Distribution; Migration"),
    ("O17", "Formal and Informal Sectors; Shadow Economy; Institutional Arrangements"),
    ("O30", "Innovation; Research and Development; Technological Change; Intellectual Property Rights: General"),
    ("O31", "Innovation and Invention: Processes and Incentives"),
    ("O33", "Technological Change: Choices and Consequences; Diffusion Processes"),
    ("O40", "Economic Growth and Aggregate Productivity: General"),
    ("O44", "Environment and Growth"),
    // P
    ("P00", "Political Economy and Comparative Economic Systems: General"),
    ("P10", "Capitalist Economies: General"),
    ("P16", "Capitalist Economies: Political Economy"),
    // Q
    ("Q00", "Agricultural and Natural Resource Economics; Environmental and Ecological Economics: General"),
    ("Q10", "Agriculture: General"),
    ("Q12", "Micro Analysis of Farm Firms, Farm Households, and Farm Input Markets"),
    ("Q20", "Renewable Resources and Conservation: General"),
    ("Q25", "Water"),
    ("Q28", "Renewable Resources and Conservation: Government Policy"),
    ("Q40", "Energy: General"),
    ("Q41", "Energy: Demand and Supply; Prices"),
    ("Q48", "Energy: Government Policy"),
    ("Q50", "Environmental Economics: General"),
    ("Q54", "Climate; Natural Disasters and Their Management; Global Warming"),
    ("Q58", "Environmental Economics: Government Policy"),
    // R
    ("R00", "Urban, Rural, Regional, Real Estate, and Transportation Economics: General"),
    ("R20", "Household Analysis: General"),
    ("R23", "Regional Migration; Regional Labor Markets; Population; Neighborhood Characteristics"),
    ("R30", "Real Estate Markets, Spatial Production Analysis, and Firm Location: General"),
    ("R31", "Housing Supply and Markets"),
    // Y
    ("Y10", "Data: Tables and Charts"),
    ("Y20", "Introductory Material"),
    ("Y30", "Book Reviews (unclassified)"),
    ("Y40", "Dissertations (unclassified)"),
    ("Y50", "Further Reading (unclassified)"),
    ("Y60", "Excerpts"),
    ("Y70", "No Author General Discussions"),
    ("Y80", "Collective Works"),
    ("Y90", "Miscellaneous Categories"),
    // Z
    ("Z00", "Other Special Topics: General"),
    ("Z10", "Cultural Economics; Economic Sociology; Economic Anthropology: General"),
    ("Z13", "Economic Sociology; Economic Anthropology; Language; Social and Economic Stratification"),
];
