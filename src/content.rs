use folio_core::{Project, Technologies};

/// Project listing shown in the projects section.
pub static PROJECTS: &[Project] = &[
    Project {
        id: "01",
        title: "Syllabus to Calendar",
        category: "Full Stack Web App (AI Integration)",
        year: "2025",
        image: "./img/syllabus-calendar/preview.jpg",
        image_detail: "./img/syllabus-calendar/detail.jpg",
        description: "A web application that converts course syllabi into interactive calendars \
            for tracking assignments, readings, and exams. An LLM-backed syllabus parser with a \
            regex fallback extracts the events, and a responsive interface manages them.",
        technologies: Technologies {
            frontend: "React, TypeScript, Tailwind CSS",
            backend: "Node.js, Express, GPT-4o API",
        },
        accent_rgb: [34, 197, 94],
        link: "https://syllabus-to-calendar-kappa.vercel.app",
    },
    Project {
        id: "02",
        title: "Cloud Storage Uploader",
        category: "Full Stack Development",
        year: "2025",
        image: "./img/cloud-storage/preview.jpg",
        image_detail: "./img/cloud-storage/detail.jpg",
        description: "A file upload platform with JWT authentication and role-based access \
            control: drag-and-drop uploads, a REST API and object storage, containerized and \
            deployed to the cloud.",
        technologies: Technologies {
            frontend: "React.js, Tailwind CSS",
            backend: "Spring Boot, PostgreSQL, AWS S3, Docker",
        },
        accent_rgb: [59, 130, 246],
        link: "https://github.com/donacianojesus/Cloud-Storage-Uploader",
    },
    Project {
        id: "03",
        title: "Weblog Blog Platform",
        category: "Backend / Full Stack Development",
        year: "2024",
        image: "./img/weblog/preview.jpg",
        image_detail: "./img/weblog/detail.jpg",
        description: "A CRUD blogging platform with BCrypt-secured authentication and a layered \
            architecture, backed by PostgreSQL and shipped with Docker Compose.",
        technologies: Technologies {
            frontend: "CLI-based interface",
            backend: "Java, PostgreSQL, JDBC, BCrypt, Docker",
        },
        accent_rgb: [245, 158, 11],
        link: "https://github.com/donacianojesus/WeBlog",
    },
    Project {
        id: "04",
        title: "Portfolio Website",
        category: "Frontend Development / Personal Project",
        year: "2025",
        image: "./img/portfolio/preview.jpg",
        image_detail: "./img/portfolio/detail.jpg",
        description: "This site: a single scrolling page with scroll-linked animation and a \
            project detail overlay.",
        technologies: Technologies {
            frontend: "Rust, WebAssembly, web-sys",
            backend: "Static Site",
        },
        accent_rgb: [139, 92, 246],
        link: "https://github.com/donacianojesus/my-portfolio",
    },
];

pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
