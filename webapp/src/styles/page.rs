pub const PAGE_STYLES: &str = r#"
/* Page sections */
main {
  padding-top: 96px;
  display: flex;
  flex-direction: column;
  gap: 96px;
}

.section {
  scroll-margin-top: 96px;
  margin: 0 auto;
  padding: 0 16px;
  width: 100%;
}

.section-narrow { max-width: 672px; }
.section-medium { max-width: 768px; }
.section-wide { max-width: 896px; }
.section-xwide { max-width: 1024px; }

.section-title {
  font-size: 1.875rem;
  font-weight: 600;
  color: var(--accent);
  text-align: center;
  margin-bottom: 32px;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
}

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  margin-bottom: 16px;
}

.hero-tagline {
  font-size: 1.125rem;
  color: var(--text-muted);
  max-width: 576px;
  margin-bottom: 24px;
}

.hero-links {
  display: flex;
  gap: 16px;
  align-items: center;
}

@media (max-width: 767px) {
  .hero-title { font-size: 2.25rem; }
}

/* Profile card */
.profile-card {
  display: flex;
  align-items: center;
  gap: 16px;
  margin-bottom: 32px;
  text-align: left;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.profile-photo {
  width: 72px;
  height: 72px;
  border-radius: 9999px;
  object-fit: cover;
}

/* Experience */
.experience-list {
  display: flex;
  flex-direction: column;
  gap: 24px;
}

.highlights {
  list-style: disc;
  padding-left: 20px;
  margin-top: 8px;
  color: var(--text-body);
  text-align: justify;
}

/* About */
.about-text {
  color: var(--text-body);
  text-align: center;
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(6, minmax(0, 1fr));
  gap: 16px;
  text-align: center;
}

.skill {
  transition: background-color 150ms ease;
}

.skill:hover {
  background-color: var(--accent-strong);
}

@media (max-width: 1023px) {
  .skills-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (max-width: 767px) {
  .skills-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 24px;
}

.project-summary {
  color: var(--text-muted);
  margin: 8px 0;
}

.project-link {
  color: var(--accent);
  font-size: 0.875rem;
  text-decoration: underline;
}

@media (max-width: 767px) {
  .projects-grid { grid-template-columns: 1fr; }
}

/* Contact */
.contact {
  text-align: center;
}

.contact-blurb {
  color: var(--text-muted);
  margin-bottom: 24px;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 16px;
}

/* Footer */
.site-footer {
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
  padding: 24px 0;
}

/* Entrance animations */
@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.fade-up { animation: fade-up 1s ease both; }
.fade-in { animation: fade-in 0.6s ease both; }
.delay-1 { animation-delay: 0.5s; }
.delay-2 { animation-delay: 1s; }

/* Config failure */
.config-error {
  max-width: 672px;
  margin: 96px auto;
  padding: 24px;
  border-radius: 12px;
  background-color: #7F1D1D;
  color: #FFFFFF;
}
"#;
