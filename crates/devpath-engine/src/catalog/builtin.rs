//! Builtin DevPath roadmap data.

use devpath_types::{Difficulty, Technology, Track, TrackId};

use Difficulty::{Advanced, Beginner, Intermediate};

fn tech(name: &str, description: &str, level: Difficulty, resources: &[&str]) -> Technology {
    Technology {
        name: name.to_string(),
        description: description.to_string(),
        level,
        resources: (!resources.is_empty())
            .then(|| resources.iter().map(|r| r.to_string()).collect()),
    }
}

struct TrackSeed<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    icon: &'a str,
    difficulty: Difficulty,
    estimated_time: &'a str,
    prerequisites: &'a [&'a str],
}

impl TrackSeed<'_> {
    fn with(self, technologies: Vec<Technology>) -> Track {
        Track {
            id: TrackId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            difficulty: self.difficulty,
            estimated_time: self.estimated_time.to_string(),
            prerequisites: (!self.prerequisites.is_empty())
                .then(|| self.prerequisites.iter().map(|p| p.to_string()).collect()),
            technologies,
        }
    }
}

pub(super) fn tracks() -> Vec<Track> {
    vec![
        TrackSeed {
            id: "frontend",
            title: "Frontend Development",
            description: "Master modern web development with a focus on user interfaces and client-side applications",
            icon: "🎨",
            difficulty: Beginner,
            estimated_time: "6-8 months",
            prerequisites: &[],
        }
        .with(vec![
            tech(
                "HTML5 & CSS3",
                "Core web technologies for structure and styling",
                Beginner,
                &["MDN Web Docs", "W3Schools"],
            ),
            tech(
                "JavaScript (ES6+)",
                "Modern JavaScript programming and DOM manipulation",
                Intermediate,
                &["JavaScript.info", "Eloquent JavaScript"],
            ),
            tech(
                "React",
                "Popular library for building user interfaces",
                Intermediate,
                &["React Docs", "React for Beginners"],
            ),
        ]),
        TrackSeed {
            id: "backend",
            title: "Backend Development",
            description: "Build robust server-side applications and APIs",
            icon: "⚙️",
            difficulty: Intermediate,
            estimated_time: "8-10 months",
            prerequisites: &["Basic programming concepts"],
        }
        .with(vec![
            tech(
                "Node.js",
                "JavaScript runtime for server-side development",
                Intermediate,
                &["Node.js Docs", "Node.js Design Patterns"],
            ),
            tech(
                "Python",
                "Versatile programming language for backend development",
                Beginner,
                &["Python.org", "Real Python"],
            ),
            tech(
                "Databases",
                "SQL and NoSQL database management",
                Intermediate,
                &["MongoDB University", "PostgreSQL Tutorial"],
            ),
        ]),
        TrackSeed {
            id: "fullstack",
            title: "Full Stack Development",
            description: "Become proficient in both frontend and backend technologies",
            icon: "🔄",
            difficulty: Advanced,
            estimated_time: "12-14 months",
            prerequisites: &["Basic web development knowledge"],
        }
        .with(vec![
            tech(
                "MERN Stack",
                "MongoDB, Express.js, React, Node.js",
                Advanced,
                &["MERN.js", "Full Stack Open"],
            ),
            tech(
                "DevOps Basics",
                "Deployment, CI/CD, and cloud services",
                Intermediate,
                &["AWS Tutorials", "Docker Docs"],
            ),
        ]),
        TrackSeed {
            id: "mobile",
            title: "Mobile Development",
            description: "Create native and cross-platform mobile applications",
            icon: "📱",
            difficulty: Intermediate,
            estimated_time: "8-10 months",
            prerequisites: &[],
        }
        .with(vec![
            tech(
                "React Native",
                "Cross-platform mobile development with React",
                Intermediate,
                &["React Native Docs", "React Native Express"],
            ),
            tech(
                "Swift",
                "Native iOS development",
                Advanced,
                &["Swift.org", "Hacking with Swift"],
            ),
        ]),
        TrackSeed {
            id: "devops",
            title: "DevOps Engineering",
            description: "Master the tools and practices for modern software deployment",
            icon: "🔧",
            difficulty: Advanced,
            estimated_time: "10-12 months",
            prerequisites: &["Linux basics", "Networking fundamentals"],
        }
        .with(vec![
            tech(
                "Docker & Kubernetes",
                "Container orchestration and management",
                Advanced,
                &["Kubernetes Docs", "Docker Labs"],
            ),
            tech(
                "CI/CD",
                "Continuous Integration and Deployment",
                Intermediate,
                &["Jenkins Tutorials", "GitHub Actions"],
            ),
        ]),
        TrackSeed {
            id: "cloud",
            title: "Cloud Computing",
            description: "Build and manage applications in the cloud",
            icon: "☁️",
            difficulty: Advanced,
            estimated_time: "8-10 months",
            prerequisites: &[],
        }
        .with(vec![
            tech(
                "AWS",
                "Amazon Web Services fundamentals",
                Advanced,
                &["AWS Training", "A Cloud Guru"],
            ),
            tech(
                "Azure",
                "Microsoft Azure cloud platform",
                Advanced,
                &["Azure Docs", "Microsoft Learn"],
            ),
        ]),
        TrackSeed {
            id: "ai-ml",
            title: "AI & Machine Learning",
            description: "Develop intelligent applications using AI and ML",
            icon: "🤖",
            difficulty: Advanced,
            estimated_time: "12-14 months",
            prerequisites: &["Python", "Statistics", "Linear Algebra"],
        }
        .with(vec![
            tech(
                "TensorFlow",
                "Machine learning framework",
                Advanced,
                &["TensorFlow Docs", "Deep Learning Book"],
            ),
            tech(
                "PyTorch",
                "Deep learning framework",
                Advanced,
                &["PyTorch Tutorials", "Fast.ai"],
            ),
        ]),
        TrackSeed {
            id: "cybersecurity",
            title: "Cybersecurity",
            description: "Learn to protect systems and networks from threats",
            icon: "🔒",
            difficulty: Advanced,
            estimated_time: "10-12 months",
            prerequisites: &["Networking", "Operating Systems"],
        }
        .with(vec![
            tech(
                "Network Security",
                "Secure network infrastructure",
                Advanced,
                &["CompTIA Security+", "Cybrary"],
            ),
            tech(
                "Ethical Hacking",
                "Penetration testing and security auditing",
                Advanced,
                &["HackTheBox", "OWASP"],
            ),
        ]),
        TrackSeed {
            id: "blockchain",
            title: "Blockchain Development",
            description: "Build decentralized applications and smart contracts",
            icon: "⛓️",
            difficulty: Advanced,
            estimated_time: "8-10 months",
            prerequisites: &["JavaScript", "Cryptography basics"],
        }
        .with(vec![
            tech(
                "Ethereum",
                "Smart contract development",
                Advanced,
                &["Ethereum.org", "CryptoZombies"],
            ),
            tech(
                "Solidity",
                "Smart contract programming language",
                Advanced,
                &["Solidity Docs", "OpenZeppelin"],
            ),
        ]),
        TrackSeed {
            id: "game-dev",
            title: "Game Development",
            description: "Create engaging games for multiple platforms",
            icon: "🎮",
            difficulty: Intermediate,
            estimated_time: "10-12 months",
            prerequisites: &["Programming basics", "3D Mathematics"],
        }
        .with(vec![
            tech(
                "Unity",
                "Cross-platform game engine",
                Intermediate,
                &["Unity Learn", "Unity Documentation"],
            ),
            tech(
                "Unreal Engine",
                "Advanced game engine",
                Advanced,
                &["Unreal Docs", "Unreal Online Learning"],
            ),
        ]),
        TrackSeed {
            id: "data-science",
            title: "Data Science",
            description: "Analyze and interpret complex data sets",
            icon: "📊",
            difficulty: Advanced,
            estimated_time: "10-12 months",
            prerequisites: &["Statistics", "Python", "SQL"],
        }
        .with(vec![
            tech(
                "Python Data Stack",
                "NumPy, Pandas, Matplotlib",
                Intermediate,
                &["Python Data Science Handbook", "Kaggle"],
            ),
            tech(
                "Machine Learning",
                "Scikit-learn, Statistical Learning",
                Advanced,
                &["Stanford ML Course", "Fast.ai"],
            ),
        ]),
        TrackSeed {
            id: "ui-ux",
            title: "UI/UX Design",
            description: "Design beautiful and functional user interfaces",
            icon: "🎨",
            difficulty: Intermediate,
            estimated_time: "6-8 months",
            prerequisites: &[],
        }
        .with(vec![
            tech(
                "Design Tools",
                "Figma, Adobe XD, Sketch",
                Intermediate,
                &["Figma Tutorials", "Design+Code"],
            ),
            tech(
                "Design Systems",
                "Component libraries and design patterns",
                Advanced,
                &["Material Design", "Human Interface Guidelines"],
            ),
        ]),
    ]
}
